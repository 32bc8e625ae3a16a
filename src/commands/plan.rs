use crate::plan::{self, WEEK_COUNT};

pub fn run() {
    println!("SOI 30-Day Call Plan");
    println!("────────────────────");

    for week in 0..WEEK_COUNT {
        let (start, end) = plan::week_ranges()[week];
        let info = plan::week_info(week);
        println!(
            "{}  Days {:>2}-{:<2}  {} calls/day  {:>3} calls  {}",
            info.title,
            start + 1,
            end + 1,
            plan::day_target(start),
            plan::week_planned_calls(week),
            info.focus
        );
    }

    println!();
    println!("Total: {} calls", plan::total_planned_calls());
}
