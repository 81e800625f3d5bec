use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Animal")]
    animal: &'a str,
    #[serde(rename = "Sound")]
    sound: &'a str,
    #[serde(rename = "Call_For")]
    call_for: &'a str,
}

const ROWS: &[(&str, &str, &str)] = &[
    ("Cow", "Moo", "Hunger"),
    ("Cow", "Moo", "Calling her calf"),
    ("Cow", "Bellow", "Distress"),
    ("Dog", "Bark", "Alerting to strangers"),
    ("Dog", "Whine", "Attention"),
    ("Dog", "Growl", "Warning"),
    ("Cat", "Meow", "Greeting"),
    ("Cat", "Purr", "Contentment"),
    ("Cat", "Hiss", "Threat"),
    ("Wolf", "Howl", "Gathering the pack"),
    ("Owl", "Hoot", "Marking territory"),
    ("Goose", "Honk", "Keeping the flock together"),
    ("Horse", "Neigh", "Finding companions"),
    ("Horse", "Snort", "Alarm"),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "animal_sounds.csv".to_string());

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for &(animal, sound, call_for) in ROWS {
        writer.serialize(Row {
            animal,
            sound,
            call_for,
        })?;
    }
    // One row short of a reason: the server skips it on load.
    writer.write_record(["Frog", "Croak"])?;
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} rows (+1 malformed) to {output_path}", ROWS.len());
    Ok(())
}
