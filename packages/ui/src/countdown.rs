use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

pub const RESEND_COOLDOWN_SECS: u32 = 30;

/// A seconds countdown that ticks down to zero once started.
#[derive(Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: Signal<u32>,
    task: Signal<Option<Task>>,
}

impl Countdown {
    pub fn remaining(&self) -> u32 {
        (self.remaining)()
    }

    pub fn is_running(&self) -> bool {
        self.remaining() > 0
    }

    /// Restart from `seconds`, cancelling any tick loop already running.
    pub fn start(&mut self, seconds: u32) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.remaining.set(seconds);
        let mut remaining = self.remaining;
        let task = spawn(async move {
            while remaining() > 0 {
                sleep(Duration::from_secs(1)).await;
                remaining -= 1;
            }
        });
        self.task.set(Some(task));
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Countdown owned by the calling component; its task ends on unmount.
pub fn use_countdown() -> Countdown {
    let remaining = use_signal(|| 0);
    let task = use_signal(|| None);
    Countdown { remaining, task }
}
