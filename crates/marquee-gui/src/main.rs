mod app;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

use clap::Parser;

/// Desktop browser for movies now playing in theaters.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Args {
    /// Log at debug level for all crates, not just marquee's own.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let args = Args::parse();
    let filter = if args.verbose {
        "debug"
    } else {
        "marquee=debug,marquee_api=debug,marquee_core=debug"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };
    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Marquee::new, app::Marquee::update, app::Marquee::view)
        .title(app::Marquee::title)
        .subscription(app::Marquee::subscription)
        .theme(app::Marquee::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}
