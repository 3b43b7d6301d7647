//! Save ingested tracks to a parquet file, one row per fix.

use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Float32Builder, StringBuilder, TimestampSecondBuilder, UInt16Builder},
    datatypes::{DataType, Field, Schema, TimeUnit},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::{fetch::StormTrack, track::classify_intensity};

pub fn save_tracks(tracks: &[StormTrack], file_path: &PathBuf) -> Result<usize> {
    let file = File::create(file_path)?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("storm_id", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new(
            "observed_at",
            DataType::Timestamp(TimeUnit::Second, Some("UTC".into())),
            false,
        ),
        Field::new("latitude", DataType::Float32, false),
        Field::new("longitude", DataType::Float32, false),
        Field::new("intensity", DataType::UInt16, false),
        Field::new("pressure", DataType::UInt16, true),
        Field::new("category", DataType::Utf8, false),
    ]));

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::ZSTD(parquet::basic::ZstdLevel::default()))
        .set_dictionary_enabled(true)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let num_rows: usize = tracks.iter().map(|t| t.track.records().len()).sum();

    let mut storm_ids = StringBuilder::with_capacity(num_rows, num_rows * 8);
    let mut names = StringBuilder::with_capacity(num_rows, num_rows * 8);
    let mut observed = TimestampSecondBuilder::with_capacity(num_rows).with_timezone("UTC");
    let mut latitudes = Float32Builder::with_capacity(num_rows);
    let mut longitudes = Float32Builder::with_capacity(num_rows);
    let mut intensities = UInt16Builder::with_capacity(num_rows);
    let mut pressures = UInt16Builder::with_capacity(num_rows);
    let mut categories = StringBuilder::with_capacity(num_rows, num_rows * 12);

    for record in tracks.iter().flat_map(|t| t.track.records()) {
        storm_ids.append_value(&record.storm_id);
        names.append_value(&record.name);
        observed.append_value(record.observed_at.and_utc().timestamp());
        latitudes.append_value(record.latitude);
        longitudes.append_value(record.longitude);
        intensities.append_value(record.intensity);
        pressures.append_option(record.pressure);
        categories.append_value(classify_intensity(record.intensity).as_str());
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(storm_ids.finish()),
        Arc::new(names.finish()),
        Arc::new(observed.finish()),
        Arc::new(latitudes.finish()),
        Arc::new(longitudes.finish()),
        Arc::new(intensities.finish()),
        Arc::new(pressures.finish()),
        Arc::new(categories.finish()),
    ];

    let batch = RecordBatch::try_new(schema, columns)?;

    writer.write(&batch)?;
    writer.close()?;

    Ok(num_rows)
}

// -- Tests -------------------------------------------------------------------
