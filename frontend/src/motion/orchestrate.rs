#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orchestration {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Orchestration {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Orchestration {
            delay_children,
            stagger_children,
        }
    }

    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children.max(0.0) + index as f64 * self.stagger_children.max(0.0)
    }
}
