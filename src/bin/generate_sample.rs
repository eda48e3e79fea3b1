use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Launches per site, roughly matching the real traffic split.
    let sites: [(&str, usize); 4] = [
        ("CCAFS LC-40", 26),
        ("VAFB SLC-4E", 10),
        ("KSC LC-39A", 13),
        ("CCAFS SLC-40", 7),
    ];

    // Booster category, success probability, payload mass (mean, sd) in kg.
    // Later booster versions fly heavier payloads and land more often.
    let boosters: [(&str, f64, (f64, f64)); 5] = [
        ("v1.0", 0.40, (1500.0, 700.0)),
        ("v1.1", 0.55, (3000.0, 1200.0)),
        ("FT", 0.72, (4500.0, 2000.0)),
        ("B4", 0.80, (4200.0, 1800.0)),
        ("B5", 0.90, (5200.0, 2200.0)),
    ];

    let mut all_site: Vec<String> = Vec::new();
    let mut all_payload: Vec<f64> = Vec::new();
    let mut all_class: Vec<i64> = Vec::new();
    let mut all_booster: Vec<String> = Vec::new();

    for (site, launches) in &sites {
        for _ in 0..*launches {
            let (booster, p_success, (mean, sd)) =
                boosters[(rng.next_u64() % boosters.len() as u64) as usize];

            let payload = rng.gauss(mean, sd).clamp(300.0, 9600.0);
            let payload = (payload * 10.0).round() / 10.0;
            let class = i64::from(rng.next_f64() < p_success);

            all_site.push(site.to_string());
            all_payload.push(payload);
            all_class.push(class);
            all_booster.push(booster.to_string());
        }
    }

    write_csv("launch_records.csv", &all_site, &all_payload, &all_class, &all_booster);
    write_parquet(
        "launch_records.parquet",
        &all_site,
        &all_payload,
        &all_class,
        &all_booster,
    );

    let successes: i64 = all_class.iter().sum();
    println!(
        "Wrote {} launches ({successes} successful) to launch_records.csv and launch_records.parquet",
        all_site.len()
    );
}

fn write_csv(path: &str, site: &[String], payload: &[f64], class: &[i64], booster: &[String]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Launch Site",
            "Payload Mass (kg)",
            "class",
            "Booster Version Category",
        ])
        .expect("Failed to write CSV header");

    for i in 0..site.len() {
        let payload_cell = format!("{:.1}", payload[i]);
        let class_cell = class[i].to_string();
        writer
            .write_record([
                site[i].as_str(),
                payload_cell.as_str(),
                class_cell.as_str(),
                booster[i].as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(path: &str, site: &[String], payload: &[f64], class: &[i64], booster: &[String]) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                site.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(payload.to_vec())),
            Arc::new(Int64Array::from(class.to_vec())),
            Arc::new(StringArray::from(
                booster.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
