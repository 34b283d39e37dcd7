//! Prints the configuration a firmware image built with the current feature
//! selection would carry. Useful for checking a board/feature combination on
//! the host before flashing hardware:
//!
//! ```text
//! cargo run -p synth-config-demos --bin print_config
//! ```

use synth_config::CONFIG;

fn main() {
    let cfg = CONFIG;

    println!("board:         {}", cfg.board.name);
    println!("codec:         {:?}", cfg.board.codec);
    println!("pins:          {:?}", cfg.board.pins);
    println!(
        "timing:        {} Hz, {} samples/block ({} us per block)",
        cfg.timing.sample_rate,
        cfg.timing.buffer_size,
        cfg.timing.block_period_us()
    );
    println!("sample format: {:?}", cfg.sample_format);
    println!("midi format:   {:?}", cfg.midi_format);
    println!("serial baud:   {}", cfg.serial_baud);
    println!("diagnostic:    {:?}", cfg.diagnostic);
    println!("status:        {:?}", cfg.status);
}
