use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lifegrade::api::ResultReport;
use lifegrade::error::LgResult;
use lifegrade::metrics::{Grade, Metric};
use lifegrade::scorer::grade::points_to_next_grade;
use lifegrade::scorer::{ScoreResult, Scorer};

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::S => Color::Magenta,
        Grade::A => Color::Green,
        Grade::B => Color::Cyan,
        Grade::C => Color::Blue,
        Grade::D => Color::Yellow,
        Grade::E | Grade::F => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn result(report: &ResultReport, scorer: &Scorer) {
    let res = &report.result;
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Weight"),
        Cell::new("Weighted").fg(Color::Cyan),
        Cell::new("Grade").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for m in &report.metrics {
        table.add_row(vec![
            Cell::new(m.metric).add_attribute(Attribute::Bold),
            Cell::new(m.score),
            Cell::new(format!("{:.2}", scorer.weight(m.metric))),
            Cell::new(format!("{:.2}", m.weighted)).fg(Color::Cyan),
            Cell::new(m.grade).fg(grade_color(m.grade)),
        ]);
    }
    println!("\n{}", table);

    println!(
        "Grade: {}   Total: {}   Percentile: {}",
        res.grade, res.total_score, res.percentile
    );
    if let Some(gap) = points_to_next_grade(res.total_score as f64) {
        println!("{:.0} points to the next grade.", gap);
    }
}

pub fn batch(results: &[LgResult<ScoreResult>]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Row").add_attribute(Attribute::Bold),
        Cell::new("Grade"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Pct"),
        Cell::new("Note"),
    ]);

    for (idx, r) in results.iter().enumerate() {
        let row = match r {
            Ok(res) => vec![
                Cell::new(idx + 1),
                Cell::new(res.grade).fg(grade_color(res.grade)),
                Cell::new(res.total_score).fg(Color::Cyan),
                Cell::new(res.percentile),
                Cell::new(""),
            ],
            Err(e) => vec![
                Cell::new(idx + 1),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(e.to_string()).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn options(metric: Metric, scorer: &Scorer) {
    let mut table = new_table();
    let weight = if metric.is_scored() {
        format!("{:.2}", scorer.weight(metric))
    } else {
        "unscored".to_string()
    };

    table.add_row(vec![
        Cell::new(format!("{} ({})", metric, weight)).add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Grade"),
    ]);

    for (token, score) in scorer.table.options(metric) {
        let grade = Grade::from_score(score as f64);
        table.add_row(vec![
            Cell::new(token),
            Cell::new(score).set_alignment(CellAlignment::Right),
            Cell::new(grade).fg(grade_color(grade)),
        ]);
    }
    println!("\n{}", table);
}
