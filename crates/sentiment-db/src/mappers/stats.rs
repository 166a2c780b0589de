//! Aggregate row -> domain count mapper

use chrono::{NaiveDate, NaiveDateTime};
use sentiment_core::entities::{BucketCount, LabelCount};

use crate::models::{DailyCountModel, HourlyCountModel, LabelCountModel};

impl From<DailyCountModel> for BucketCount<NaiveDate> {
    fn from(model: DailyCountModel) -> Self {
        BucketCount::new(model.day, model.label, model.total)
    }
}

impl From<HourlyCountModel> for BucketCount<NaiveDateTime> {
    fn from(model: HourlyCountModel) -> Self {
        BucketCount::new(model.hour, model.label, model.total)
    }
}

impl From<LabelCountModel> for LabelCount {
    fn from(model: LabelCountModel) -> Self {
        LabelCount::new(model.label, model.total)
    }
}
