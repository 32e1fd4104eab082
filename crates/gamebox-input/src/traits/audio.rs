/// Process-wide audio switch driven by the mute key.
/// Implementations: the runtime's audio subsystem, MockAudio (testing).
pub trait AudioMixer {
    /// Silence every channel.
    fn total_audio_mute(&mut self);

    /// Restore every channel silenced by [`AudioMixer::total_audio_mute`].
    fn total_audio_unmute(&mut self);
}
