//! Deferred saving.
//!
//! Mutations hand a snapshot to [`AutoSaver::schedule`] and carry on. A single
//! worker thread owns the storage backend and writes snapshots in the order
//! they were scheduled, so two saves never race on the same file and a save
//! always reflects the mutation that asked for it.

use super::*;

use crate::storage::ContactStorage;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

enum Job {
    Save(Vec<Contact>),
    Flush(Sender<Result<(), AppError>>),
}

pub struct AutoSaver {
    tx: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl AutoSaver {
    pub fn spawn(storage: Box<dyn ContactStorage>) -> Result<Self, AppError> {
        let (tx, rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("addressbook-autosave".to_string())
            .spawn(move || run_worker(storage, rx))?;

        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queues `snapshot` for writing. Does not wait for the disk.
    pub fn schedule(&self, snapshot: Vec<Contact>) -> Result<(), AppError> {
        self.send(Job::Save(snapshot))
    }

    /// Waits until everything scheduled so far has been written. Returns the
    /// first save error seen since the previous flush.
    pub fn flush(&self) -> Result<(), AppError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.send(Job::Flush(reply_tx))?;

        reply_rx
            .recv()
            .map_err(|_| AppError::persistence("autosave worker stopped"))?
    }

    fn send(&self, job: Job) -> Result<(), AppError> {
        self.tx
            .as_ref()
            .ok_or_else(|| AppError::persistence("autosave worker stopped"))?
            .send(job)
            .map_err(|_| AppError::persistence("autosave worker stopped"))
    }
}

impl Drop for AutoSaver {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain the queue and exit
        drop(self.tx.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            error!("autosave worker panicked");
        }
    }
}

fn run_worker(storage: Box<dyn ContactStorage>, rx: Receiver<Job>) {
    let mut failure: Option<AppError> = None;
    let mut next: Option<Job> = None;

    loop {
        let job = match next.take() {
            Some(job) => job,
            None => match rx.recv() {
                Ok(job) => job,
                Err(_) => break,
            },
        };

        match job {
            Job::Save(mut snapshot) => {
                // Only the newest of back-to-back snapshots needs writing.
                // A flush request stops the look-ahead so it still sees this save.
                while let Ok(queued) = rx.try_recv() {
                    match queued {
                        Job::Save(newer) => {
                            debug!("superseded snapshot dropped");
                            snapshot = newer;
                        }
                        flush @ Job::Flush(_) => {
                            next = Some(flush);
                            break;
                        }
                    }
                }

                if let Err(e) = storage.save(&snapshot)
                    && failure.is_none()
                {
                    failure = Some(e);
                }
            }
            Job::Flush(reply) => {
                let result = match failure.take() {
                    Some(e) => Err(e),
                    None => Ok(()),
                };
                let _ = reply.send(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::storage::FileStorage;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_latest_snapshot() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("addressBook.csv");
        let saver = AutoSaver::spawn(Box::new(FileStorage::new(&path)))?;

        let mut store = ContactStore::new();
        for i in 0..50 {
            store.add(format!("Contact {i}"), format!("ADDR{i}"));
            saver.schedule(store.snapshot())?;
        }
        saver.flush()?;

        let reloaded = FileStorage::new(&path).load()?;
        assert_eq!(reloaded.count(), 50);
        assert_eq!(reloaded.contacts(), store.contacts());
        Ok(())
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("addressBook.csv");
        let saver = AutoSaver::spawn(Box::new(FileStorage::new(&path)))?;

        let mut store = ContactStore::new();
        store.add("Alice", "1A2b3C");
        saver.schedule(store.snapshot())?;
        store.add("Bob", "4D5e6F");
        saver.flush()?;

        assert_eq!(fs::read_to_string(&path)?, "1A2b3C,Alice\n");
        Ok(())
    }

    #[test]
    fn flush_reports_failure_once() -> Result<(), AppError> {
        let dir = tempdir()?;
        let blocker = dir.path().join("file");
        fs::write(&blocker, "")?;
        let saver = AutoSaver::spawn(Box::new(FileStorage::new(blocker.join("book.csv"))))?;

        saver.schedule(vec![Contact::new("Alice", "1A2b3C")])?;
        let err = saver.flush().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PersistenceFailure);

        // Error was handed over; nothing new has failed since
        saver.flush()?;
        Ok(())
    }

    #[test]
    fn drop_drains_queue() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("addressBook.csv");

        {
            let saver = AutoSaver::spawn(Box::new(FileStorage::new(&path)))?;
            saver.schedule(vec![Contact::new("Alice", "1A2b3C")])?;
        }

        assert_eq!(fs::read_to_string(&path)?, "1A2b3C,Alice\n");
        Ok(())
    }
}
