//! The module contains functions for displaying the CLI splash screen.
//!
//! The list of things shown on launch:
//! - Title
//! - Short Description
//! - Version Information

use colored::*;

use crate::cli::colors::DESKBOARD_BLUE;

pub fn splash_screen() {
    show_splash_screen();
    show_version_info();
}

fn show_splash_screen() {
    print!(
        r#"
    {}
        "#,
        r"
    ██████╗ ███████╗███████╗██╗  ██╗██████╗  ██████╗  █████╗ ██████╗ ██████╗
    ██╔══██╗██╔════╝██╔════╝██║ ██╔╝██╔══██╗██╔═══██╗██╔══██╗██╔══██╗██╔══██╗
    ██║  ██║█████╗  ███████╗█████╔╝ ██████╔╝██║   ██║███████║██████╔╝██║  ██║
    ██║  ██║██╔══╝  ╚════██║██╔═██╗ ██╔══██╗██║   ██║██╔══██║██╔══██╗██║  ██║
    ██████╔╝███████╗███████║██║  ██╗██████╔╝╚██████╔╝██║  ██║██║  ██║██████╔╝
    ╚═════╝ ╚══════╝╚══════╝╚═╝  ╚═╝╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝
        "
        .color(DESKBOARD_BLUE)
    )
}

fn show_version_info() {
    println!(
        r"
    {}

    Version {}
    Authored by {}
        ",
        env!("CARGO_PKG_DESCRIPTION").color(DESKBOARD_BLUE),
        env!("CARGO_PKG_VERSION").color(DESKBOARD_BLUE).italic(),
        env!("CARGO_PKG_AUTHORS").color(DESKBOARD_BLUE).italic(),
    )
}
