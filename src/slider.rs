//! Position bookkeeping for the carousel.
//!
//! `SliderState` is the bare cyclic counter. `SliderController` pairs it with a
//! `SliderSurface` (the DOM in the browser, a fake in tests) and is what the
//! click, wheel and resize handlers talk to.

use log::{debug, info, warn};

use crate::config::DEFAULT_VISIBLE_ITEMS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// What happens to the slider when the viewport changes size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Position is left as is and navigation hidden at init stays hidden.
    Legacy,
    /// Position is clamped into the new range and navigation follows
    /// whether there is anything left to slide.
    #[default]
    Reflow,
}

impl ResizePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(ResizePolicy::Legacy),
            "reflow" => Some(ResizePolicy::Reflow),
            _ => None,
        }
    }
}

/// Turns a raw `--slider-items` value into a visible count.
pub fn visible_count_from_style(raw: &str) -> usize {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as usize,
        _ => {
            warn!(
                "unusable slider item count {:?}, falling back to {}",
                trimmed, DEFAULT_VISIBLE_ITEMS
            );
            DEFAULT_VISIBLE_ITEMS
        }
    }
}

/// A single wheel event as far as the slider cares about it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelGesture {
    pub modifier_held: bool,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelGesture {
    pub fn step(&self) -> Option<Step> {
        if !self.modifier_held {
            return None;
        }
        // Some browsers move Shift+wheel onto the horizontal axis.
        let delta = if self.delta_y != 0.0 { self.delta_y } else { self.delta_x };
        if delta > 0.0 {
            Some(Step::Next)
        } else if delta < 0.0 {
            Some(Step::Prev)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderState {
    item_count: usize,
    visible_count: usize,
    position: usize,
}

impl SliderState {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            item_count,
            visible_count,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of positions past the first window. Negative when everything fits.
    pub fn slidable_count(&self) -> isize {
        let visible = isize::try_from(self.visible_count).unwrap_or(isize::MAX);
        (self.item_count as isize).saturating_sub(visible)
    }

    pub fn can_slide(&self) -> bool {
        self.slidable_count() > 0
    }

    fn last_position(&self) -> usize {
        self.slidable_count().max(0) as usize
    }

    pub fn advance(&mut self) {
        if self.position as isize >= self.slidable_count() {
            self.position = 0;
        } else {
            self.position += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.position == 0 {
            self.position = self.last_position();
        } else {
            self.position -= 1;
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Next => self.advance(),
            Step::Prev => self.retreat(),
        }
    }

    pub fn resize(&mut self, visible_count: usize, policy: ResizePolicy) {
        self.visible_count = visible_count;
        if policy == ResizePolicy::Reflow {
            self.position = self.position.min(self.last_position());
        }
    }
}

/// Everything the controller needs from the rendered slider.
pub trait SliderSurface {
    /// Current `--slider-items` value, already parsed.
    fn visible_count(&self) -> usize;
    fn item_count(&self) -> usize;
    /// Left edge of the item at `index` relative to the track, if there is one.
    fn item_left(&self, index: usize) -> Option<f64>;
    fn translate(&self, offset: f64);
    fn set_nav_visible(&self, visible: bool);
}

pub struct SliderController<S> {
    surface: S,
    state: SliderState,
    policy: ResizePolicy,
    nav_wired: bool,
}

impl<S: SliderSurface> SliderController<S> {
    pub fn init(surface: S, policy: ResizePolicy) -> Self {
        let state = SliderState::new(surface.item_count(), surface.visible_count());
        let nav_wired = state.can_slide();
        if !nav_wired {
            surface.set_nav_visible(false);
        }
        info!(
            "slider ready: {} items, {} visible, {} slidable",
            state.item_count(),
            state.visible_count(),
            state.slidable_count()
        );
        Self {
            surface,
            state,
            policy,
            nav_wired,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    #[cfg(test)]
    pub fn nav_wired(&self) -> bool {
        self.nav_wired
    }

    pub fn advance(&mut self) {
        self.step(Step::Next);
    }

    pub fn retreat(&mut self) {
        self.step(Step::Prev);
    }

    /// Button press. Ignored while navigation is unwired.
    pub fn click(&mut self, step: Step) {
        if !self.nav_wired {
            return;
        }
        match step {
            Step::Next => self.advance(),
            Step::Prev => self.retreat(),
        }
    }

    pub fn wheel(&mut self, gesture: WheelGesture) {
        if let Some(step) = gesture.step() {
            self.step(step);
        }
    }

    pub fn resize(&mut self) {
        let visible_count = self.surface.visible_count();
        self.state.resize(visible_count, self.policy);
        if self.policy == ResizePolicy::Reflow && self.state.can_slide() != self.nav_wired {
            self.nav_wired = self.state.can_slide();
            self.surface.set_nav_visible(self.nav_wired);
        }
        debug!(
            "slider resized: {} visible, position {}",
            visible_count,
            self.state.position()
        );
        self.move_track();
    }

    /// Translation for the current position, read from live layout.
    pub fn offset(&self) -> Option<f64> {
        self.surface.item_left(self.state.position()).map(|left| -left)
    }

    fn step(&mut self, step: Step) {
        self.state.step(step);
        debug!("slider {:?} to position {}", step, self.state.position());
        self.move_track();
    }

    fn move_track(&self) {
        match self.offset() {
            Some(offset) => self.surface.translate(offset),
            None => debug!("no slider item at position {}", self.state.position()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        visible: Cell<usize>,
        translations: RefCell<Vec<f64>>,
        nav_visible: Cell<Option<bool>>,
    }

    /// Items laid out in a row, each `width` px wide.
    #[derive(Clone)]
    struct FakeSurface {
        items: usize,
        width: f64,
        recorded: Rc<Recorded>,
    }

    impl FakeSurface {
        fn new(items: usize, visible: usize) -> Self {
            let recorded = Rc::new(Recorded::default());
            recorded.visible.set(visible);
            Self {
                items,
                width: 240.0,
                recorded,
            }
        }
    }

    impl SliderSurface for FakeSurface {
        fn visible_count(&self) -> usize {
            self.recorded.visible.get()
        }

        fn item_count(&self) -> usize {
            self.items
        }

        fn item_left(&self, index: usize) -> Option<f64> {
            (index < self.items).then(|| index as f64 * self.width)
        }

        fn translate(&self, offset: f64) {
            self.recorded.translations.borrow_mut().push(offset);
        }

        fn set_nav_visible(&self, visible: bool) {
            self.recorded.nav_visible.set(Some(visible));
        }
    }

    fn positions_after_advances(state: &mut SliderState, count: usize) -> Vec<usize> {
        (0..count)
            .map(|_| {
                state.advance();
                state.position()
            })
            .collect()
    }

    #[test]
    fn six_items_three_visible_wraps_after_three_steps() {
        let mut state = SliderState::new(6, 3);
        assert_eq!(state.slidable_count(), 3);
        assert_eq!(positions_after_advances(&mut state, 4), vec![1, 2, 3, 0]);
    }

    #[test]
    fn advance_cycle_returns_to_start() {
        for (items, visible) in [(6, 3), (5, 1), (10, 4), (2, 1)] {
            let mut state = SliderState::new(items, visible);
            let cycle = state.slidable_count() as usize + 1;
            for _ in 0..cycle {
                state.advance();
            }
            assert_eq!(state.position(), 0, "{items} items / {visible} visible");
        }
    }

    #[test]
    fn retreat_cycles_backwards() {
        let mut state = SliderState::new(6, 3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.retreat();
            seen.push(state.position());
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
    }

    #[test]
    fn position_stays_at_zero_when_everything_fits() {
        let mut state = SliderState::new(3, 5);
        assert_eq!(state.slidable_count(), -2);
        state.advance();
        assert_eq!(state.position(), 0);
        state.retreat();
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn init_hides_nav_when_items_fit() {
        for (items, visible) in [(3, 5), (4, 4), (0, 2)] {
            let surface = FakeSurface::new(items, visible);
            let controller = SliderController::init(surface.clone(), ResizePolicy::default());
            assert!(!controller.nav_wired());
            assert_eq!(surface.recorded.nav_visible.get(), Some(false));
        }
    }

    #[test]
    fn init_leaves_nav_alone_when_sliding_is_possible() {
        let surface = FakeSurface::new(6, 3);
        let controller = SliderController::init(surface.clone(), ResizePolicy::default());
        assert!(controller.nav_wired());
        assert_eq!(surface.recorded.nav_visible.get(), None);
        assert_eq!(controller.state().position(), 0);
    }

    #[test]
    fn clicks_are_ignored_while_unwired() {
        let surface = FakeSurface::new(3, 5);
        let mut controller = SliderController::init(surface.clone(), ResizePolicy::default());
        controller.click(Step::Next);
        controller.click(Step::Prev);
        assert_eq!(controller.state().position(), 0);
        assert!(surface.recorded.translations.borrow().is_empty());
    }

    #[test]
    fn clicks_move_the_track_to_the_item_edge() {
        let surface = FakeSurface::new(6, 3);
        let mut controller = SliderController::init(surface.clone(), ResizePolicy::default());
        controller.click(Step::Next);
        controller.click(Step::Next);
        controller.click(Step::Prev);
        assert_eq!(*surface.recorded.translations.borrow(), vec![-240.0, -480.0, -240.0]);
    }

    #[test]
    fn offset_is_idempotent() {
        let surface = FakeSurface::new(6, 3);
        let mut controller = SliderController::init(surface, ResizePolicy::default());
        controller.advance();
        controller.advance();
        assert_eq!(controller.offset(), Some(-480.0));
        assert_eq!(controller.offset(), controller.offset());
    }

    #[test]
    fn unmodified_wheel_is_ignored() {
        let surface = FakeSurface::new(6, 3);
        let mut controller = SliderController::init(surface, ResizePolicy::default());
        controller.wheel(WheelGesture {
            modifier_held: false,
            delta_x: 0.0,
            delta_y: 120.0,
        });
        controller.wheel(WheelGesture {
            modifier_held: false,
            delta_x: 0.0,
            delta_y: -120.0,
        });
        assert_eq!(controller.state().position(), 0);
    }

    #[test]
    fn modified_wheel_matches_advance_and_retreat() {
        let mut by_wheel = SliderController::init(FakeSurface::new(6, 3), ResizePolicy::default());
        let mut by_call = SliderController::init(FakeSurface::new(6, 3), ResizePolicy::default());

        let forward = WheelGesture {
            modifier_held: true,
            delta_x: 0.0,
            delta_y: 53.0,
        };
        by_wheel.wheel(forward);
        by_call.advance();
        assert_eq!(by_wheel.state(), by_call.state());

        let backward = WheelGesture {
            modifier_held: true,
            delta_x: 0.0,
            delta_y: -53.0,
        };
        by_wheel.wheel(backward);
        by_wheel.wheel(backward);
        by_call.retreat();
        by_call.retreat();
        assert_eq!(by_wheel.state(), by_call.state());
        assert_eq!(by_wheel.state().position(), 3);
    }

    #[test]
    fn wheel_falls_back_to_horizontal_delta() {
        let gesture = WheelGesture {
            modifier_held: true,
            delta_x: -40.0,
            delta_y: 0.0,
        };
        assert_eq!(gesture.step(), Some(Step::Prev));
        assert_eq!(WheelGesture { modifier_held: true, ..Default::default() }.step(), None);
    }

    #[test]
    fn reflow_clamps_position_and_rewires_nav() {
        let surface = FakeSurface::new(6, 3);
        let mut controller = SliderController::init(surface.clone(), ResizePolicy::Reflow);
        for _ in 0..3 {
            controller.advance();
        }
        assert_eq!(controller.state().position(), 3);

        surface.recorded.visible.set(5);
        controller.resize();
        assert_eq!(controller.state().position(), 1);
        assert_eq!(surface.recorded.translations.borrow().last(), Some(&-240.0));

        surface.recorded.visible.set(6);
        controller.resize();
        assert_eq!(controller.state().position(), 0);
        assert!(!controller.nav_wired());
        assert_eq!(surface.recorded.nav_visible.get(), Some(false));
    }

    #[test]
    fn reflow_shows_nav_once_items_overflow() {
        let surface = FakeSurface::new(4, 4);
        let mut controller = SliderController::init(surface.clone(), ResizePolicy::Reflow);
        assert!(!controller.nav_wired());

        surface.recorded.visible.set(2);
        controller.resize();
        assert!(controller.nav_wired());
        assert_eq!(surface.recorded.nav_visible.get(), Some(true));
        controller.click(Step::Next);
        assert_eq!(controller.state().position(), 1);
    }

    #[test]
    fn legacy_keeps_position_and_hidden_nav() {
        let surface = FakeSurface::new(6, 3);
        let mut controller = SliderController::init(surface.clone(), ResizePolicy::Legacy);
        for _ in 0..3 {
            controller.advance();
        }
        surface.recorded.visible.set(5);
        controller.resize();
        assert_eq!(controller.state().position(), 3);
        assert_eq!(controller.offset(), Some(-720.0));

        let hidden = FakeSurface::new(3, 5);
        let mut controller = SliderController::init(hidden.clone(), ResizePolicy::Legacy);
        hidden.recorded.visible.set(1);
        controller.resize();
        assert!(!controller.nav_wired());
        assert_eq!(hidden.recorded.nav_visible.get(), Some(false));
    }

    #[test]
    fn huge_visible_count_never_makes_room_to_slide() {
        let mut state = SliderState::new(6, visible_count_from_style("1e30"));
        assert!(state.slidable_count() <= 0);
        assert!(!state.can_slide());
        for _ in 0..7 {
            state.advance();
            assert_eq!(state.position(), 0);
        }
        state.retreat();
        assert_eq!(state.position(), 0);

        let surface = FakeSurface::new(6, usize::MAX);
        let controller = SliderController::init(surface.clone(), ResizePolicy::default());
        assert!(!controller.nav_wired());
        assert_eq!(surface.recorded.nav_visible.get(), Some(false));
    }

    #[test]
    fn resize_policy_names() {
        assert_eq!(ResizePolicy::from_name("legacy"), Some(ResizePolicy::Legacy));
        assert_eq!(ResizePolicy::from_name(" Reflow "), Some(ResizePolicy::Reflow));
        assert_eq!(ResizePolicy::from_name("clamp"), None);
    }

    #[test]
    fn visible_count_parsing() {
        assert_eq!(visible_count_from_style(" 3"), 3);
        assert_eq!(visible_count_from_style("2.7"), 2);
        assert_eq!(visible_count_from_style("0"), 0);
        assert_eq!(visible_count_from_style(""), DEFAULT_VISIBLE_ITEMS);
        assert_eq!(visible_count_from_style("auto"), DEFAULT_VISIBLE_ITEMS);
        assert_eq!(visible_count_from_style("-2"), DEFAULT_VISIBLE_ITEMS);
    }
}
