use gloo_timers::callback::Interval;
use log::debug;

pub struct FrameLoop {
    label: &'static str,
    _interval: Interval,
}

impl FrameLoop {
    pub fn start<F>(label: &'static str, period_ms: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        debug!("{label}: frame loop started ({period_ms} ms)");
        FrameLoop {
            label,
            _interval: Interval::new(period_ms, tick),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        debug!("{}: frame loop stopped", self.label);
    }
}
