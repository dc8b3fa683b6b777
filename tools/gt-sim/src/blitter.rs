use gt::{BankFlags, Page, VideoFlags};
use log::{debug, warn};

use crate::reg_blitter::BlitterRegisters;
use crate::reg_system_control::SystemControl;
use crate::{FrameBuffer, HEIGHT, WIDTH};

/// What one accepted START latched, for inspection after the fact.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlitRecord {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
    /// Palette index the fill wrote, i.e. the inverted COLOR register.
    pub color: u8,
    pub page: Page,
    pub color_fill: bool,
    /// Pixels actually written.
    pub written: u32,
    pub started_at: u64,
}

/// The blitter paints a whole job the moment it starts and then stays busy
/// for one cycle per pixel, so the IRQ arrives when it would on hardware.
#[derive(Debug, Default)]
pub struct Blitter {
    cycles_remaining: Option<u64>,
    pub irq_trigger: bool,
    dropped: usize,
}

impl Blitter {
    pub fn clear_irq_trigger(&mut self) -> bool {
        let result = self.irq_trigger;
        self.irq_trigger = false;
        result
    }

    #[inline(always)]
    pub fn busy(&self) -> bool {
        self.cycles_remaining.is_some()
    }

    #[inline(always)]
    pub fn cycles_remaining(&self) -> Option<u64> {
        self.cycles_remaining
    }

    /// STARTs that arrived while a job was still running.
    #[inline(always)]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Consume a START write. Returns the job if one was accepted.
    pub fn start(
        &mut self,
        regs: &mut BlitterRegisters,
        sc: &SystemControl,
        framebuffers: &mut [FrameBuffer; 2],
        now: u64,
    ) -> Option<BlitRecord> {
        let (bit_start, start_addressed) = regs.start.read_once();
        if start_addressed {
            self.irq_trigger = false;
        }

        if !bit_start {
            return None;
        }

        if self.busy() {
            self.dropped += 1;
            warn!(target: "blitter", "START while a blit is running; ignored");
            return None;
        }

        let width = regs.width & 0b0111_1111;
        let height = regs.height & 0b0111_1111;
        let color_fill = sc.dma_flags.contains(VideoFlags::DMA_COLORFILL);
        let page = sc.draw_target();

        let mut record = BlitRecord {
            x: regs.vx,
            y: regs.vy,
            width,
            height,
            color: !regs.color,
            page,
            color_fill,
            written: 0,
            started_at: now,
        };

        debug!(target: "blitter", "starting blit {}x{} at ({}, {}) page {:?}; color mode {}",
            width, height, regs.vx, regs.vy, page, color_fill);

        if !sc.dma_flags.contains(VideoFlags::DMA_ENABLE) {
            debug!(target: "blitter", "dma access disabled; nothing written. dma flags: {:08b}", sc.dma_flags.bits());
        } else if !color_fill {
            warn!(target: "blitter", "sprite copy is not simulated; nothing written");
        } else {
            record.written = fill(&record, sc, &mut framebuffers[page.index()]);
        }

        let pixels = width as u64 * height as u64;
        self.cycles_remaining = Some(pixels.max(1));

        Some(record)
    }

    /// Run the job clock forward. Completion raises the IRQ if `DMA_IRQ` is set.
    pub fn advance(&mut self, cycles: u64, sc: &SystemControl) {
        let Some(remaining) = self.cycles_remaining else {
            return;
        };

        if cycles < remaining {
            self.cycles_remaining = Some(remaining - cycles);
            return;
        }

        self.cycles_remaining = None;
        debug!(target: "blitter", "blit complete");
        if sc.dma_flags.contains(VideoFlags::DMA_IRQ) {
            self.irq_trigger = true;
        }
    }
}

fn fill(job: &BlitRecord, sc: &SystemControl, fb: &mut FrameBuffer) -> u32 {
    let clip_x = sc.banking_register.contains(BankFlags::CLIP_X);
    let clip_y = sc.banking_register.contains(BankFlags::CLIP_Y);

    // color 0 is transparent unless the blit is opaque
    if job.color == 0 && !sc.dma_flags.contains(VideoFlags::DMA_OPAQUE) {
        return 0;
    }

    let mut written = 0;
    for offset_y in 0..job.height as usize {
        let mut out_y = job.y as usize + offset_y;
        if out_y >= HEIGHT {
            if clip_y {
                break;
            }
            out_y %= HEIGHT;
        }

        for offset_x in 0..job.width as usize {
            let mut out_x = job.x as usize + offset_x;
            if out_x >= WIDTH {
                if clip_x {
                    break;
                }
                out_x %= WIDTH;
            }

            fb[out_x + out_y * WIDTH] = job.color;
            written += 1;
        }
    }
    written
}
