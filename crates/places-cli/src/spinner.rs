use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::interval;

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Progress indicator drawn on stderr while a request is in flight
pub struct Spinner {
    is_active: Arc<AtomicBool>,
    message: String,
    enabled: bool,
    out: SharedWriter,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        Self::with_writer(message, Box::new(io::stderr()), atty::is(atty::Stream::Stderr))
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self::with_writer("", Box::new(io::sink()), false)
    }

    fn with_writer(message: &str, out: Box<dyn Write + Send>, enabled: bool) -> Self {
        Self {
            is_active: Arc::new(AtomicBool::new(false)),
            message: message.to_string(),
            enabled,
            out: Arc::new(Mutex::new(out)),
        }
    }

    pub fn start(&self) {
        if !self.enabled {
            return;
        }
        // First frame is drawn here so a stop() right after always clears it
        draw(&self.out, &format!("{} {} ", self.message.blue().bold(), FRAMES[0].cyan()));
        self.is_active.store(true, Ordering::Relaxed);

        let is_active = Arc::clone(&self.is_active);
        let message = self.message.clone();
        let out = Arc::clone(&self.out);

        tokio::spawn(async move {
            let mut interval = interval(Duration::from_millis(80));
            interval.tick().await;
            let mut frame_index = 1;

            loop {
                interval.tick().await;

                let Ok(mut out) = out.lock() else { break };
                if !is_active.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(out, "\r{} {} ", message.blue().bold(), FRAMES[frame_index].cyan());
                let _ = out.flush();
                frame_index = (frame_index + 1) % FRAMES.len();
            }
        });
    }

    pub fn stop(&self) {
        // Holding the writer keeps the frame task from drawing after the clear
        let Ok(mut out) = self.out.lock() else { return };
        if !self.is_active.swap(false, Ordering::Relaxed) {
            return;
        }
        let _ = write!(out, "\r\x1b[K");
        let _ = out.flush();
    }
}

fn draw(out: &SharedWriter, text: &str) {
    if let Ok(mut out) = out.lock() {
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
