/// Fire-and-forget sound effect.
///
/// Playback completion is not tracked and repeated calls are not
/// suppressed: a trigger fires again on every render of its frame.
pub trait Sound {
    fn play(&self);
}
