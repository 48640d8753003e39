use super::Config;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Run every check, printing progress when `verbose`. Returns the problems found.
    pub fn check(&self, verbose: bool) -> Vec<String> {
        let mut problems = vec![];
        problems.extend(self.check_log_level(verbose));
        problems.extend(self.check_layouts(verbose));
        problems.extend(self.check_proportions(verbose));
        problems.extend(self.check_pools(verbose));
        problems.extend(self.check_timings(verbose));
        problems.extend(self.check_ignore_rules(verbose));
        problems
    }

    pub fn check_log_level(&self, verbose: bool) -> Option<String> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        EnvFilter::builder()
            .parse(&self.log_level)
            .err()
            .map(|err| format!("Log level is invalid: {err}"))
    }

    pub fn check_layouts(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking layouts: {:?}", self.layouts);
        }
        let mut problems = vec![];
        if self.layouts.is_empty() {
            problems.push("No layouts configured, every layout will be available.".to_owned());
        }
        let mut seen = HashSet::new();
        for layout in &self.layouts {
            if !seen.insert(layout) {
                problems.push(format!("Layout `{layout}` is listed more than once."));
            }
        }
        if !self.layouts.is_empty() && !self.layouts.contains(&self.initial_layout) {
            problems.push(format!(
                "Initial layout `{}` is not in `layouts`, `{}` will be used.",
                self.initial_layout, self.layouts[0]
            ));
        }
        problems
    }

    pub fn check_proportions(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!(
                "Checking proportions: initial {}, min {}, step {}",
                self.proportion, self.proportion_min, self.proportion_step
            );
        }
        let mut problems = vec![];
        if !(0.0..0.5).contains(&self.proportion_min) {
            problems.push(format!(
                "`proportion_min` must be in [0, 0.5), got {}.",
                self.proportion_min
            ));
        }
        let max = 1.0 - self.proportion_min;
        if self.proportion < self.proportion_min || self.proportion > max {
            problems.push(format!(
                "`proportion` must be in [{}, {max}], got {}.",
                self.proportion_min, self.proportion
            ));
        }
        if self.proportion_step <= 0.0 || self.proportion_step >= 1.0 {
            problems.push(format!(
                "`proportion_step` must be in (0, 1), got {}.",
                self.proportion_step
            ));
        }
        problems
    }

    pub fn check_pools(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking pools: masters {:?}, slaves {:?}", self.masters, self.slaves);
        }
        let mut problems = vec![];
        if self.masters.initial > self.masters.max {
            problems.push("`masters.initial` is larger than `masters.max`.".to_owned());
        }
        if self.masters.min > self.masters.initial {
            problems.push("`masters.min` is larger than `masters.initial`.".to_owned());
        }
        if self.slaves.min > self.slaves.initial {
            problems.push("`slaves.min` is larger than `slaves.initial`.".to_owned());
        }
        if self.slaves.max == 0 {
            problems.push("`slaves.max` must be at least 1.".to_owned());
        }
        if self.slaves.initial == 0 || self.slaves.initial > self.slaves.max {
            problems.push("`slaves.initial` must be between 1 and `slaves.max`.".to_owned());
        }
        if self.gap < 0 {
            problems.push(format!("`gap` can't be negative, got {}.", self.gap));
        }
        problems
    }

    pub fn check_timings(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!(
                "Checking timings: debounce {}ms, pointer poll {}ms, drag threshold {}ms",
                self.debounce, self.pointer_poll, self.drag_threshold
            );
        }
        let mut problems = vec![];
        if self.pointer_poll == 0 {
            problems.push("`pointer_poll` must be at least 1ms.".to_owned());
        }
        if self.debounce > 1000 {
            problems.push(format!(
                "`debounce` of {}ms will make dragging feel unresponsive.",
                self.debounce
            ));
        }
        problems
    }

    pub fn check_ignore_rules(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking {} ignore rules.", self.ignore.len());
        }
        self.ignore
            .iter()
            .filter_map(|rule| {
                rule.check()
                    .err()
                    .map(|err| format!("Ignore rule {rule:?} is invalid: {err}"))
            })
            .collect()
    }
}
