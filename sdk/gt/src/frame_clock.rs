//! Vertical blank waits.
//!
//! The video chip raises an NMI at the start of every vertical blank, but
//! only while `DMA_NMI` is set. Waiting means arming it, halting with `WAI`
//! and disarming it again, so stray NMIs never wake an unrelated wait.

use crate::{framebuffers::Framebuffers, hardware::Hardware, scr::VideoFlags, shadow::Shadow};

/// Halt until the next vertical blank.
pub fn wait_vblank<H: Hardware>(hw: &mut H, video: &mut Shadow<VideoFlags>) {
    video.update(hw, |f| f.insert(VideoFlags::DMA_NMI));
    hw.wait_for_interrupt();
    video.update(hw, |f| f.remove(VideoFlags::DMA_NMI));
}

/// Halt until the next vertical blank, then flip while still inside it.
///
/// The NMI is armed with an overlay so it never enters the shadow; the flip's
/// write of the video shadow disarms it in the same store.
pub fn sync<H: Hardware>(hw: &mut H, fb: &mut Framebuffers) {
    fb.video.overlay(hw, VideoFlags::DMA_NMI);
    hw.wait_for_interrupt();
    fb.flip(hw);
}
