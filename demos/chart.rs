use fts::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let birthdate = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1996-03-08".to_string())
        .parse::<BirthDate>()?;
    let lunar = SolarAlmanac::default().lookup(&birthdate);

    let mut rng = rand::rng();
    let series = Synthesizer::new(lunar.sign()).synthesize(Span::forecast_window(), &mut rng);

    let mut slot = ChartSlot::new();
    let options = DrawOptions::default()
        .title(format!("Ten-Year Fortune Outlook ({})", lunar.sign()))
        .show_average(true)
        .draw_output(DrawOutput::Svg("fortune.svg"));
    let handle = slot.acquire(&series, options)?;
    println!("chart saved to {}", handle.path());

    Ok(())
}
