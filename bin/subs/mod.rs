// Progress bar plumbing shared by the subcommands. Each subcommand
// instantiates its own bar with pb_create! or pb_create_spinner! and
// drives it through the pb_* statement macros.

macro_rules! pb_create {
    () => {
        lazy_static::lazy_static! {
            static ref PB: indicatif::ProgressBar = indicatif::ProgressBar::new(0).with_style(
                indicatif::ProgressStyle::with_template("{prefix} [{bar:50}] {pos}/{len}")
                    .expect("Invalid progress bar template")
                    .progress_chars("=>-"),
            );
        }
    };
}

macro_rules! pb_create_spinner {
    () => {
        lazy_static::lazy_static! {
            static ref PB: indicatif::ProgressBar = indicatif::ProgressBar::new_spinner();
        }
    };
}

macro_rules! pb_set_print {
    () => {
        PB.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        PB.enable_steady_tick(std::time::Duration::from_millis(120));
    };
}

macro_rules! pb_set_prefix {
    ($prefix:expr) => {
        PB.set_prefix($prefix);
    };
}

macro_rules! pb_set_length {
    ($len:expr) => {
        PB.set_length($len as u64);
    };
}

macro_rules! pb_inc {
    () => {
        PB.inc(1);
    };
}

macro_rules! pb_done {
    () => {
        PB.finish_and_clear();
    };
}

pub mod align;
pub mod extract;
pub mod rawinfo;
pub mod runnable;
