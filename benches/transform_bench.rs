// Benchmark for the schedule expansion
// Measures expansion throughput over growing tables

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use family_timetable::models::day::DaySet;
use family_timetable::models::schedule::ScheduleRow;
use family_timetable::services::schedule::plot_intervals;

fn build_table(rows: usize) -> Vec<ScheduleRow> {
    (0..rows)
        .map(|index| {
            let days = match index % 3 {
                0 => "Mon,Wed,Fri",
                1 => "Tue,Thu",
                _ => "Mon,Tue,Wed,Thu,Fri",
            };
            ScheduleRow::new(
                format!("Activity {index}"),
                days,
                format!("{:02}:00", 8 + index % 12),
                format!("{:02}:30", 9 + index % 12),
                "#5D9CEC",
            )
        })
        .collect()
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_expansion");

    for rows in [10usize, 100, 1000] {
        let table = build_table(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| plot_intervals(black_box(table), black_box(DaySet::Weekdays)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expansion);
criterion_main!(benches);
