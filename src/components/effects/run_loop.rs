//! Per-frame run loop driven by `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// A token that has not been cancelled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Raise the flag for every clone.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// True once any clone has been cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// One iteration of a frame loop, shared with the scheduler.
pub type Tick = Rc<dyn Fn()>;

/// Runs a tick once before the next repaint.
pub trait FrameScheduler {
	/// Queue `tick` for the next frame. Returns a handle for [`cancel`](Self::cancel).
	fn request(&self, tick: &Tick) -> Option<i32>;

	/// Drop a queued tick that has not run yet.
	fn cancel(&self, handle: i32);

	/// Release anything retained on behalf of the loop's tick.
	fn release(&self) {}
}

/// Schedules ticks with `window.requestAnimationFrame`.
#[derive(Default)]
pub struct AnimationFrames {
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler for AnimationFrames {
	fn request(&self, tick: &Tick) -> Option<i32> {
		let window = web_sys::window()?;
		let mut slot = self.callback.borrow_mut();
		let cb = slot.get_or_insert_with(|| {
			let tick = tick.clone();
			Closure::new(move || tick())
		});
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&self, handle: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}

	fn release(&self) {
		self.callback.borrow_mut().take();
	}
}

/// Calls a frame function once per display refresh until stopped.
///
/// Each tick runs the frame function and then requests the next frame.
/// `stop` must not be called from inside the frame function itself.
pub struct FrameLoop<S: FrameScheduler + 'static = AnimationFrames> {
	name: &'static str,
	token: CancelToken,
	scheduler: Rc<S>,
	tick: Rc<RefCell<Option<Tick>>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Start a loop on the browser's animation frames.
	pub fn start(name: &'static str, frame: impl FnMut() + 'static) -> Self {
		Self::with_scheduler(name, AnimationFrames::default(), frame)
	}
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
	/// Start a loop whose frames come from `scheduler`.
	pub fn with_scheduler(name: &'static str, scheduler: S, frame: impl FnMut() + 'static) -> Self {
		let token = CancelToken::new();
		let scheduler = Rc::new(scheduler);
		let slot: Rc<RefCell<Option<Tick>>> = Rc::new(RefCell::new(None));
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let frame = RefCell::new(frame);

		let (token_inner, scheduler_inner, slot_inner, pending_inner) = (
			token.clone(),
			scheduler.clone(),
			slot.clone(),
			pending.clone(),
		);
		let tick: Tick = Rc::new(move || {
			pending_inner.set(None);
			if token_inner.is_cancelled() {
				return;
			}
			(&mut *frame.borrow_mut())();
			if let Some(ref next) = *slot_inner.borrow() {
				pending_inner.set(scheduler_inner.request(next));
			}
		});

		pending.set(scheduler.request(&tick));
		// The tick reaches itself through the slot; `stop` breaks the cycle.
		*slot.borrow_mut() = Some(tick);
		debug!("neon-landing: {} loop started", name);

		Self {
			name,
			token,
			scheduler,
			tick: slot,
			pending,
		}
	}

	/// False once [`stop`](Self::stop) has run.
	pub fn is_running(&self) -> bool {
		!self.token.is_cancelled()
	}

	/// Cancel the pending frame and release the frame function.
	pub fn stop(&mut self) {
		if self.token.is_cancelled() {
			return;
		}
		self.token.cancel();
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel(handle);
		}
		self.scheduler.release();
		self.tick.borrow_mut().take();
		debug!("neon-landing: {} loop stopped", self.name);
	}
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// Holds requested ticks until the test triggers a refresh.
	#[derive(Clone, Default)]
	pub struct ManualFrames {
		queue: Rc<RefCell<Vec<(i32, Tick)>>>,
		next_handle: Rc<Cell<i32>>,
		cancelled: Rc<RefCell<Vec<i32>>>,
	}

	impl ManualFrames {
		/// Run every tick queued so far, as one display refresh.
		pub fn refresh(&self) {
			let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
			for (_, tick) in due {
				tick();
			}
		}

		pub fn queued(&self) -> usize {
			self.queue.borrow().len()
		}

		pub fn cancelled(&self) -> Vec<i32> {
			self.cancelled.borrow().clone()
		}
	}

	impl FrameScheduler for ManualFrames {
		fn request(&self, tick: &Tick) -> Option<i32> {
			let handle = self.next_handle.get() + 1;
			self.next_handle.set(handle);
			self.queue.borrow_mut().push((handle, tick.clone()));
			Some(handle)
		}

		fn cancel(&self, handle: i32) {
			self.queue.borrow_mut().retain(|(h, _)| *h != handle);
			self.cancelled.borrow_mut().push(handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::ManualFrames;
	use super::*;

	fn counting_loop(frames: &ManualFrames) -> (FrameLoop<ManualFrames>, Rc<Cell<u32>>) {
		let count = Rc::new(Cell::new(0));
		let seen = count.clone();
		let l = FrameLoop::with_scheduler("test", frames.clone(), move || {
			seen.set(seen.get() + 1)
		});
		(l, count)
	}

	#[test]
	fn token_clones_share_state() {
		let token = CancelToken::new();
		let observer = token.clone();
		assert!(!observer.is_cancelled());
		token.cancel();
		assert!(observer.is_cancelled());
	}

	#[test]
	fn runs_once_per_refresh_and_reschedules() {
		let frames = ManualFrames::default();
		let (l, count) = counting_loop(&frames);
		assert_eq!(count.get(), 0);
		assert_eq!(frames.queued(), 1);
		for _ in 0..3 {
			frames.refresh();
		}
		assert_eq!(count.get(), 3);
		assert_eq!(frames.queued(), 1);
		assert!(l.is_running());
	}

	#[test]
	fn stopped_loop_never_calls_frame_again() {
		let frames = ManualFrames::default();
		let (mut l, count) = counting_loop(&frames);
		frames.refresh();
		l.stop();
		assert!(!l.is_running());
		assert_eq!(frames.queued(), 0);
		assert_eq!(frames.cancelled(), vec![2]);
		frames.refresh();
		assert_eq!(count.get(), 1);
	}

	#[test]
	fn stop_is_idempotent() {
		let frames = ManualFrames::default();
		let (mut l, count) = counting_loop(&frames);
		l.stop();
		l.stop();
		assert_eq!(frames.cancelled(), vec![1]);
		frames.refresh();
		assert_eq!(count.get(), 0);
	}

	#[test]
	fn stop_releases_frame_function() {
		let frames = ManualFrames::default();
		let captured = Rc::new(());
		let held = captured.clone();
		let mut l = FrameLoop::with_scheduler("test", frames.clone(), move || {
			let _ = Rc::strong_count(&held);
		});
		frames.refresh();
		assert!(Rc::strong_count(&captured) > 1);
		l.stop();
		assert_eq!(Rc::strong_count(&captured), 1);
	}

	#[test]
	fn dropping_the_loop_stops_it() {
		let frames = ManualFrames::default();
		let (l, count) = counting_loop(&frames);
		frames.refresh();
		drop(l);
		assert_eq!(frames.queued(), 0);
		frames.refresh();
		assert_eq!(count.get(), 1);
	}
}
