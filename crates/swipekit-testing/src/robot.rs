use swipekit_foundation::{InputModality, SwipeResult, SwipeToReveal};

/// Scripts drags against a detector, one modality at a time.
///
/// ```
/// use swipekit_testing::{SwipeConfig, SwipeResult, SwipeRobot, SwipeToReveal};
///
/// let mut detector = SwipeToReveal::new(SwipeConfig::default());
/// let result = SwipeRobot::touch(&mut detector).drag(200.0, &[190.0], 140.0);
/// assert_eq!(result, SwipeResult::Left);
/// ```
pub struct SwipeRobot<'a> {
    detector: &'a mut SwipeToReveal,
    modality: InputModality,
}

impl<'a> SwipeRobot<'a> {
    pub fn new(detector: &'a mut SwipeToReveal, modality: InputModality) -> Self {
        Self { detector, modality }
    }

    pub fn touch(detector: &'a mut SwipeToReveal) -> Self {
        Self::new(detector, InputModality::Touch)
    }

    pub fn mouse(detector: &'a mut SwipeToReveal) -> Self {
        Self::new(detector, InputModality::Mouse)
    }

    pub fn press(&mut self, x: f32) -> &mut Self {
        self.detector.on_press_start(x, self.modality);
        self
    }

    pub fn move_to(&mut self, x: f32) -> &mut Self {
        self.detector.on_move(x, self.modality);
        self
    }

    pub fn release_at(&mut self, x: f32) -> SwipeResult {
        self.detector.on_release(Some(x), self.modality)
    }

    pub fn release(&mut self) -> SwipeResult {
        self.detector.on_release(None, self.modality)
    }

    pub fn cancel(&mut self) -> bool {
        self.detector.on_cancel(self.modality)
    }

    /// Press at `from`, visit each of `via`, release at `to`.
    pub fn drag(&mut self, from: f32, via: &[f32], to: f32) -> SwipeResult {
        self.press(from);
        for &x in via {
            self.move_to(x);
        }
        self.release_at(to)
    }

    pub fn swipe_left(&mut self) -> SwipeResult {
        let threshold = self.detector.config().threshold();
        self.drag(threshold * 4.0, &[threshold * 2.0], 0.0)
    }

    pub fn swipe_right(&mut self) -> SwipeResult {
        let threshold = self.detector.config().threshold();
        self.drag(0.0, &[threshold * 2.0], threshold * 4.0)
    }
}
