//! Threaded stand-in for the overlay video generator.
//!
//! A background thread plays the part of the sync separator, ticking once
//! per field into a one-slot channel. The render loop waits on the channel
//! with a timeout, exactly like the firmware waits on its frame-sync signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use osd_common::{SyncOutcome, VideoGenerator, VideoStandard};

use crate::timing::{VSYNC_DROPOUT, field_time};

pub struct SimVideo {
    standard: VideoStandard,
    ticks: Receiver<()>,
    dropout: Arc<AtomicBool>,
    reenables: u32,
}

impl SimVideo {
    /// Spawn the vsync thread.
    pub fn start(standard: VideoStandard) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(1);
        let dropout = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dropout);
        let period = field_time(standard);

        thread::Builder::new()
            .name("vsync".into())
            .spawn(move || vsync_thread(&tx, &flag, period))?;

        info!("vsync thread started: {:?}, {} ms fields", standard, period.as_millis());
        Ok(Self {
            standard,
            ticks: rx,
            dropout,
            reenables: 0,
        })
    }

    /// Make the next field arrive late enough to trip the sync timeout.
    pub fn inject_dropout(&self) { self.dropout.store(true, Ordering::Relaxed); }

    /// Times the render loop had to re-enable the output.
    #[inline]
    pub const fn reenables(&self) -> u32 { self.reenables }
}

fn vsync_thread(
    tx: &SyncSender<()>,
    dropout: &AtomicBool,
    period: Duration,
) {
    loop {
        thread::sleep(period);
        if dropout.swap(false, Ordering::Relaxed) {
            debug!("vsync dropout for {} ms", VSYNC_DROPOUT.as_millis());
            thread::sleep(VSYNC_DROPOUT);
        }
        // A full slot means the renderer is behind; the field is dropped.
        match tx.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => {}
            Err(TrySendError::Disconnected(())) => return,
        }
    }
}

impl VideoGenerator for SimVideo {
    fn standard(&self) -> VideoStandard { self.standard }

    fn enable_output(&mut self) {
        self.reenables += 1;
        info!("overlay output re-enabled ({} total)", self.reenables);
    }

    /// Blocks the calling thread and resolves on its first poll; the
    /// simulator drives the loop with `block_on` and has nothing else to run.
    async fn wait_frame(
        &mut self,
        timeout_ms: u32,
    ) -> SyncOutcome {
        let timeout = Duration::from_millis(u64::from(timeout_ms));
        match self.ticks.recv_timeout(timeout) {
            Ok(()) => SyncOutcome::Frame,
            Err(RecvTimeoutError::Timeout) => SyncOutcome::TimedOut,
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(timeout);
                SyncOutcome::TimedOut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    use embassy_futures::block_on;

    use super::*;

    #[test]
    fn test_ticks_arrive_within_timeout() {
        let mut video = SimVideo::start(VideoStandard::Pal).unwrap();
        assert_eq!(block_on(video.wait_frame(500)), SyncOutcome::Frame);
        assert_eq!(block_on(video.wait_frame(500)), SyncOutcome::Frame);
    }

    #[test]
    fn test_dropout_times_out() {
        let mut video = SimVideo::start(VideoStandard::Ntsc).unwrap();
        video.inject_dropout();
        assert_eq!(block_on(video.wait_frame(100)), SyncOutcome::TimedOut);
    }

    #[test]
    fn test_enable_output_counts() {
        let mut video = SimVideo::start(VideoStandard::Pal).unwrap();
        video.enable_output();
        video.enable_output();
        assert_eq!(video.reenables(), 2);
        assert_eq!(video.standard(), VideoStandard::Pal);
    }

    #[test]
    fn test_wait_resolves_on_first_poll() {
        let mut video = SimVideo::start(VideoStandard::Pal).unwrap();
        let mut cx = Context::from_waker(Waker::noop());

        {
            let mut wait = pin!(video.wait_frame(100));
            assert_eq!(wait.as_mut().poll(&mut cx), Poll::Ready(SyncOutcome::Frame));
        }

        video.inject_dropout();
        let mut wait = pin!(video.wait_frame(1));
        assert_eq!(wait.as_mut().poll(&mut cx), Poll::Ready(SyncOutcome::TimedOut));
    }
}
