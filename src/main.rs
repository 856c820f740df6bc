use fts::prelude::*;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1).context("usage: fts-rs <YYYY-MM-DD>")?;
    let birthdate = arg
        .parse::<BirthDate>()
        .with_context(|| format!("invalid birth date {arg:?}"))?;

    let lunar = SolarAlmanac::default().lookup(&birthdate);
    let mut rng = rand::rng();

    // one request = one uninterrupted pass over the fixed ten-year window
    let synth = Synthesizer::new(lunar.sign());
    let series = synth.synthesize(Span::forecast_window(), &mut rng);

    let deriver = SummaryDeriver::new(lunar.sign());
    let narrative = deriver.compose(&series, &lunar, &mut rng);
    println!("{narrative}");

    #[cfg(feature = "draws")]
    {
        let mut slot = ChartSlot::new();
        let options = DrawOptions::default()
            .title("Ten-Year Fortune Outlook (2026-2036)")
            .show_average(true)
            .draw_output(DrawOutput::Png("fortune.png"));
        let handle = slot.acquire(&series, options)?;
        println!("chart saved to {} ({} months)", handle.path(), handle.points());
        slot.release();
    }

    Ok(())
}
