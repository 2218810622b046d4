use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::trace;

const PROGRESS_TEMPLATE: &str = " {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}";

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    bar.set_message(job_name.to_string());
    match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        Ok(style) => bar.set_style(style),
        Err(err) => trace!("keeping default progress style: {}", err),
    }
    bar
}
