use crate::config::Config;
use crate::tracker::Tracker;
use crate::window_systems::WindowSystem;
use crate::Command;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Drive the tracker until the command channel closes, then restore every
    /// client and hand the tracker back.
    pub async fn event_loop(mut self, mut commands: mpsc::Receiver<Command>) -> Self {
        let mut poll = time::interval(self.config.pointer_poll());
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut event_buffer = vec![];
        loop {
            for event in event_buffer.drain(..) {
                self.window_event_handler(event, Instant::now());
            }
            self.window_system.flush();

            let deadline = self.debounce.map(time::Instant::from_std);
            tokio::select! {
                () = self.window_system.wait_readable() => {
                    event_buffer.append(&mut self.window_system.get_next_events());
                }
                _ = poll.tick() => {
                    self.pointer_handler(Instant::now());
                }
                () = time::sleep_until(deadline.unwrap_or_else(time::Instant::now)), if deadline.is_some() => {
                    self.debounce_handler(Instant::now());
                }
                command = commands.recv() => match command {
                    Some(command) => {
                        if let Err(err) = self.command_handler(&command) {
                            tracing::warn!(?command, error = %err, "Command failed");
                        }
                    }
                    None => break,
                }
            }
        }

        tracing::info!("Command channel closed, shutting down");
        self.shutdown();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Location, Xyhw};
    use crate::tracker::tests::{tracker, A, B};
    use crate::Command;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn commands_run_until_the_channel_closes() {
        let tracker = tracker(&[A, B]);
        let (tx, rx) = mpsc::channel(8);
        tx.send(Command::Untile(Some(Location::default()))).await.unwrap();
        drop(tx);

        let tracker = tracker.event_loop(rx).await;
        assert!(tracker.clients.is_empty());
        assert!(!tracker.workspaces[&Location::default()].enabled);
        assert_eq!(tracker.window_system.geometry(A), Some(Xyhw::new(0, 0, 300, 200)));
        assert_eq!(tracker.window_system.geometry(B), Some(Xyhw::new(10, 10, 300, 200)));
    }
}
