use lifegrade::scorer::Scorer;

const BAR_WIDTH: f64 = 50.0;

pub fn curve(points: &[(f64, f64)], scorer: &Scorer) {
    let peak = points.iter().fold(0.0f64, |a, &(_, y)| a.max(y));

    println!(
        "\nPopulation (mean {:.1}, std dev {:.1})",
        scorer.distribution.mean, scorer.distribution.std_dev
    );
    for &(x, y) in points {
        let len = if peak > 0.0 {
            (y / peak * BAR_WIDTH).round() as usize
        } else {
            0
        };
        println!(
            "{:>6.1} | {:<width$} {:>3}%",
            x,
            "#".repeat(len),
            scorer.percentile(x),
            width = BAR_WIDTH as usize
        );
    }
}
