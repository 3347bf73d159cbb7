use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

pub trait Tracker {
    type Ctx: Clone;
    fn new(ctx: Self::Ctx) -> Self;
    fn finish(&self, msg: Option<String>);
}

const PB_STYLE: &str =
    "{spinner:.blue} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> =
    Lazy::new(|| match ProgressStyle::with_template(PB_STYLE) {
        Ok(style) => Some(style.tick_chars(TICK).progress_chars(PB_CHARS)),
        Err(_) => None,
    });

pub struct ProgressTracker {
    pub pb: ProgressBar,
}

#[derive(Debug, Clone)]
pub struct ProgressTrackerConfig {
    pub len: Option<u64>,
}

impl Tracker for ProgressTracker {
    type Ctx = ProgressTrackerConfig;

    fn new(ctx: Self::Ctx) -> Self {
        let pb = match ctx.len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::no_length(),
        };

        if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.set_style(style.clone());
        }

        ProgressTracker { pb }
    }

    fn finish(&self, msg: Option<String>) {
        match msg {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish(),
        }
    }
}
