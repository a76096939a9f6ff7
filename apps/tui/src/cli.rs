use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "year-wrapped",
    version,
    about = "Your year in review, in the terminal"
)]
pub struct CliArgs {
    /// Print the timeline report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write debug logs to the log file
    #[arg(long)]
    pub debug: bool,

    /// Open the journey zoomed into this month (e.g. "sep", "October")
    #[arg(long, value_name = "NAME")]
    pub month: Option<String>,

    /// Skip the landing screen and open this slide
    #[arg(long, value_name = "NAME")]
    pub slide: Option<String>,

    /// Override the frame rate
    #[arg(long, value_name = "N")]
    pub fps: Option<u16>,

    /// Wheel travel per scroll notch
    #[arg(long = "wheel-step", value_name = "N")]
    pub wheel_step: Option<f64>,

    /// Jump animations straight to their end state
    #[arg(long = "reduced-motion")]
    pub reduced_motion: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(fps) = self.fps {
            std::env::set_var("WRAPPED_FPS", fps.to_string());
        }
        if let Some(step) = self.wheel_step {
            std::env::set_var("WRAPPED_WHEEL_STEP", step.to_string());
        }
        if self.reduced_motion {
            std::env::set_var("WRAPPED_REDUCED_MOTION", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
