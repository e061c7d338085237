/// Growth per frame while below target.
pub const STEP: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Analytics bar height easing up toward its target.
pub struct BarValue {
    pub height: f64,
    pub target: f64,
}

impl BarValue {
    pub fn new(target: f64) -> Self {
        Self {
            height: 0.0,
            target,
        }
    }

    pub fn update(&mut self) {
        if self.height < self.target {
            self.height = (self.height + STEP).min(self.target);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.height >= self.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entity/bar_value.rs"]
mod tests;
