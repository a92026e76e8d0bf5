#[cfg(test)]
#[path = "../../tests/unit/utils/statistics_test.rs"]
mod statistics_test;

/// Gets arithmetic mean of values, zero for an empty slice.
pub fn get_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.
    } else {
        let sum: f64 = values.iter().sum();
        sum / values.len() as f64
    }
}

/// Returns standard deviation over the whole slice.
pub fn get_stdev(values: &[f64]) -> f64 {
    get_variance_mean(values).0.sqrt()
}

/// Returns variance and mean.
fn get_variance_mean(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0., 0.);
    }

    let mean = get_mean(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    // NOTE Bessel's correction is not used here
    ((first - (second * second / values.len() as f64)) / (values.len() as f64), mean)
}
