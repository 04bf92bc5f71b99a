//! Print a swatch of the terminal's colors.
//!
//! Run with `--color=always|never|auto` to override the default policy.

#![allow(clippy::print_stdout)]

use tintty::cmd::{DynSetBackground8, ResetStyle, SetForeground};
use tintty::color::AnsiColor;
use tintty::gate::{Choice, Gate, StreamKind};
use tintty::style::Style;

fn main() -> std::io::Result<()> {
    tintty::enable_virtual_terminal()?;

    let choice = match std::env::args().nth(1).as_deref() {
        Some("--color=always") => Choice::Always,
        Some("--color=never") => Choice::Never,
        _ => Choice::Auto,
    };
    let gate = Gate::with_choice(choice);
    let out = StreamKind::Stdout;

    // The sixteen ANSI colors, by name.
    for index in 0..=15_u8 {
        let color = AnsiColor::try_from(index).expect("index is in range");
        println!(
            "{}{:2} {}{}",
            gate.display(out, SetForeground(color)),
            index,
            color.name(),
            gate.display(out, ResetStyle),
        );
    }

    // The 6x6x6 embedded RGB cube, as filled cells.
    for row in 0..6_u8 {
        for column in 0..36_u8 {
            let index = 16 + row * 36 + column;
            print!("{}  {}", gate.display(out, DynSetBackground8(index)), gate.display(out, ResetStyle));
        }
        println!();
    }

    // The grayscale ramp.
    for index in 232..=255_u8 {
        print!("{}  {}", gate.display(out, DynSetBackground8(index)), gate.display(out, ResetStyle));
    }
    println!();

    let style = Style::default().bold().italic().with_foreground(AnsiColor::Magenta);
    println!("{}", gate.apply(out, &style, "And that's all the colors!"));

    Ok(())
}
