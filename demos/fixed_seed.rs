use fts::prelude::*;

use rand::{SeedableRng, rngs::StdRng};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // a seeded source reproduces the same decade every run
    let mut rng = StdRng::seed_from_u64(2026);

    let birthdate = BirthDate::new(1990, 6, 15)?;
    let lunar = SolarAlmanac::default().lookup(&birthdate);
    println!("born {birthdate} -> sign {}", lunar.sign());

    let synth = Synthesizer::new(lunar.sign());
    let series = synth.synthesize(Span::forecast_window(), &mut rng);

    let data = ChartData::from(&series);
    for (label, values) in data.labels().iter().zip(data.values()) {
        let [open, close, low, high] = values;
        println!("{label}  open {open:5.1}  close {close:5.1}  low {low:5.1}  high {high:5.1}");
    }

    let deriver = SummaryDeriver::new(lunar.sign());
    println!("\n{}", deriver.compose(&series, &lunar, &mut rng));

    Ok(())
}
