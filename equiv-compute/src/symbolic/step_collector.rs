/// Receives a record of each rewrite an algorithm performs.
///
/// Implemented for `()` to discard the records, and for `Vec<S>` to keep them in order.
pub trait StepCollector<S> {
    /// Records that a step was taken.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
