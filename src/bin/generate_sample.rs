use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn gaussian_spike(t: usize, at: usize, width: f64, amplitude: f64) -> f64 {
    amplitude * (-((t as f64 - at as f64).powi(2)) / (2.0 * width.powi(2))).exp()
}

const SAMPLES: usize = 1024;
const SAMPLE_RATE_HZ: f64 = 200.0;
/// (frequency Hz, amplitude g)
const TONES: [(f64, f64); 2] = [(12.5, 0.8), (37.5, 0.3)];
/// (sample index, amplitude g) of simulated impacts.
const IMPACTS: [(usize, f64); 4] = [(180, 4.5), (411, -5.0), (702, 6.0), (950, 4.0)];
/// Sample indices whose vibration cell is left blank.
const GAPS: [usize; 3] = [64, 500, 777];
/// Seed for reproducible output.
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let sensor_noise = Normal::new(0.0, 0.05).context("sensor noise distribution")?;
    let thermal_noise = Normal::new(0.0, 0.1).context("thermal noise distribution")?;
    let output_path = "sample_vibration.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["time", "vibration", "temperature"])?;

    for t in 0..SAMPLES {
        let secs = t as f64 / SAMPLE_RATE_HZ;
        let tones: f64 = TONES
            .iter()
            .map(|&(f, a)| a * (2.0 * std::f64::consts::PI * f * secs).sin())
            .sum();
        let impacts: f64 = IMPACTS
            .iter()
            .map(|&(at, a)| gaussian_spike(t, at, 1.5, a))
            .sum();
        let vibration = tones + impacts + sensor_noise.sample(&mut rng);
        let temperature = 18.0 + 0.002 * t as f64 + thermal_noise.sample(&mut rng);

        let vibration_cell = if GAPS.contains(&t) {
            String::new()
        } else {
            format!("{vibration:.5}")
        };
        writer.write_record([
            format!("{secs:.3}"),
            vibration_cell,
            format!("{temperature:.2}"),
        ])?;
    }
    writer.flush().context("flushing sample csv")?;

    log::info!("wrote {SAMPLES} samples to {output_path}");
    println!(
        "Wrote {SAMPLES} samples ({} blank vibration cells) to {output_path}",
        GAPS.len()
    );
    Ok(())
}
