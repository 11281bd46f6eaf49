//! Console transcript of a completed analysis

use crate::runner::AnalysisReport;

/// Print every computed value in human-readable form
pub fn print_summary(report: &AnalysisReport) {
    println!();
    println!("One-way ANOVA Results:");
    println!("---------------------");
    println!("F-statistic: {:.4}", report.anova.f_statistic);
    println!("p-value: {:.4}", report.anova.p_value);
    println!(
        "Significant difference: {}",
        if report.anova.significant { "Yes" } else { "No" }
    );
    println!(
        "Groups: {}, Observations: {}",
        report.anova.n_groups, report.anova.n_total
    );

    println!();
    println!("Descriptive Statistics:");
    println!(
        "{:<16} {:>8} {:>12} {:>12} {:>12}",
        "group", "count", "mean", "std", "sem"
    );
    for group in &report.descriptives {
        println!(
            "{:<16} {:>8} {:>12.4} {:>12.4} {:>12.4}",
            group.label,
            group.summary.count,
            group.summary.mean,
            group.summary.std_dev,
            group.summary.sem
        );
    }

    println!();
    println!("Tukey's HSD Test Results:");
    println!(
        "{:<12} {:<12} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "group1", "group2", "meandiff", "p-adj", "lower", "upper", "reject"
    );
    for pair in &report.tukey {
        println!(
            "{:<12} {:<12} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            pair.group_a,
            pair.group_b,
            pair.mean_diff,
            pair.p_adjusted,
            pair.ci_lower,
            pair.ci_upper,
            pair.reject
        );
    }

    println!();
    println!("Results saved to: {}", report.workbook_path.display());
    println!("Plot saved to: {}", report.chart_path.display());
}
