//! Default text output
//!
//! Prints the run the way the automation engine's default screen output does:
//! a starred banner per play and task, and a recap table at the end.

use log_groups::{HostStats, LifecycleEvent, LineSink, Renderer, Result};

/// Fewest stars printed after a banner title
const MIN_STARS: usize = 3;

/// Width of the host column in the recap
const HOST_COLUMN: usize = 26;

pub struct TextRenderer {
    width: usize,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// `TITLE ****...` padded to the configured width, after a blank line
    fn banner(&self, title: &str, out: &mut dyn LineSink) -> Result<()> {
        let title = title.trim();
        let stars = self
            .width
            .saturating_sub(title.chars().count() + 1)
            .max(MIN_STARS);

        out.emit("")?;
        out.emit(&format!("{} {}", title, "*".repeat(stars)))
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, event: &LifecycleEvent, out: &mut dyn LineSink) -> Result<()> {
        match event {
            LifecycleEvent::PlayStart { name } => {
                let title = if name.trim().is_empty() {
                    "PLAY".to_string()
                } else {
                    format!("PLAY [{}]", name.trim())
                };
                self.banner(&title, out)
            }
            LifecycleEvent::TaskStart { name, role } => {
                let title = match role {
                    Some(role) => format!("TASK [{} : {}]", role, name.trim()),
                    None => format!("TASK [{}]", name.trim()),
                };
                self.banner(&title, out)
            }
            LifecycleEvent::RunStats { hosts } => {
                self.banner("PLAY RECAP", out)?;
                for (host, stats) in hosts {
                    out.emit(&recap_line(host, stats))?;
                }
                Ok(())
            }
        }
    }
}

fn recap_line(host: &str, stats: &HostStats) -> String {
    let line = format!(
        "{:<width$} : ok={:<4} changed={:<4} unreachable={:<4} failed={:<4} skipped={:<4} rescued={:<4} ignored={:<4}",
        host,
        stats.ok,
        stats.changed,
        stats.unreachable,
        stats.failed,
        stats.skipped,
        stats.rescued,
        stats.ignored,
        width = HOST_COLUMN,
    );
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_groups::MemorySink;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn render(renderer: &mut TextRenderer, event: &LifecycleEvent) -> Vec<String> {
        let mut sink = MemorySink::new();
        renderer.render(event, &mut sink).unwrap();
        sink.into_lines()
    }

    #[test]
    fn test_play_banner_fills_width() {
        let mut renderer = TextRenderer::new(20);
        let lines = render(&mut renderer, &LifecycleEvent::play_start("Deploy"));

        assert_eq!(lines, ["", "PLAY [Deploy] ******"]);
        assert_eq!(lines[1].len(), 20);
    }

    #[test]
    fn test_unnamed_play() {
        let mut renderer = TextRenderer::new(10);
        let lines = render(&mut renderer, &LifecycleEvent::play_start(""));
        assert_eq!(lines[1], "PLAY *****");
    }

    #[test]
    fn test_task_banner_with_role() {
        let mut renderer = TextRenderer::new(10);

        let lines = render(&mut renderer, &LifecycleEvent::task_start("Install", Some("web")));
        assert_eq!(lines[1], "TASK [web : Install] ***");

        let lines = render(&mut renderer, &LifecycleEvent::task_start("Ping", None));
        assert_eq!(lines[1], "TASK [Ping] ***");

        let lines = render(&mut renderer, &LifecycleEvent::task_start("Ping", Some("")));
        assert_eq!(lines[1], "TASK [Ping] ***");
    }

    #[test]
    fn test_recap() {
        let mut hosts = BTreeMap::new();
        hosts.insert(
            "web1".to_string(),
            HostStats {
                ok: 4,
                changed: 2,
                ..HostStats::default()
            },
        );
        let mut renderer = TextRenderer::new(20);
        let lines = render(&mut renderer, &LifecycleEvent::RunStats { hosts });

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "PLAY RECAP *********");
        assert_eq!(
            lines[2],
            "web1                       : ok=4    changed=2    unreachable=0    failed=0    skipped=0    rescued=0    ignored=0"
        );
    }
}
