// src/tweaks/announce.rs

use std::collections::{BTreeMap, HashMap, HashSet};

use crossbeam::channel::{self, Receiver, Sender};
use indexmap::IndexMap;

use super::TweakValue;

/// Identifies one declaration site: its label plus how many sites with the
/// same label were declared before it in the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteKey {
    pub label: String,
    pub occurrence: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    Mounted { site: SiteKey, default: TweakValue },
    Unmounted { site: SiteKey },
}

/// Collects the labels and defaults announced by mounted declaration sites.
///
/// Sites register when they are first declared and are dropped by
/// [`end_frame`](Self::end_frame) once a frame passes without them.
#[derive(Debug, Default)]
pub struct AnnouncementBoard {
    /// Mounted sites in mount order.
    sites: IndexMap<SiteKey, TweakValue>,
    seen: HashSet<SiteKey>,
    occurrences: HashMap<String, usize>,
    in_frame: bool,
    subscribers: Vec<Sender<BoardEvent>>,
}

impl AnnouncementBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (sender, receiver) = channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    pub fn begin_frame(&mut self) {
        self.seen.clear();
        self.occurrences.clear();
        self.in_frame = true;
    }

    /// Unmounts every site that was not declared since [`begin_frame`](Self::begin_frame).
    pub fn end_frame(&mut self) {
        if !self.in_frame {
            return;
        }
        self.in_frame = false;

        let stale: Vec<SiteKey> = self
            .sites
            .keys()
            .filter(|site| !self.seen.contains(*site))
            .cloned()
            .collect();
        for site in stale {
            self.deregister(&site);
        }
    }

    /// Announces a site's label and default. Re-declaring a mounted site is a
    /// no-op unless its default changed.
    pub fn register(&mut self, label: &str, default: TweakValue) -> SiteKey {
        let occurrence = self.occurrences.entry(label.to_string()).or_insert(0);
        let site = SiteKey {
            label: label.to_string(),
            occurrence: *occurrence,
        };
        *occurrence += 1;
        self.seen.insert(site.clone());

        match self.sites.get_mut(&site) {
            Some(current) if *current == default => {}
            Some(current) => {
                *current = default;
                tracing::debug!("Site {:?} re-announced with default {}", site, default);
                self.notify(BoardEvent::Mounted {
                    site: site.clone(),
                    default,
                });
            }
            None => {
                self.sites.insert(site.clone(), default);
                tracing::debug!("Site {:?} mounted with default {}", site, default);
                self.notify(BoardEvent::Mounted {
                    site: site.clone(),
                    default,
                });
            }
        }
        site
    }

    /// Removes a site. Returns `false` if it was not mounted.
    pub fn deregister(&mut self, site: &SiteKey) -> bool {
        if self.sites.shift_remove(site).is_none() {
            return false;
        }
        tracing::debug!("Site {:?} unmounted", site);
        self.notify(BoardEvent::Unmounted { site: site.clone() });
        true
    }

    pub fn is_mounted(&self, site: &SiteKey) -> bool {
        self.sites.contains_key(site)
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// The announcement set: every mounted label with its default. When two
    /// sites share a label, the one mounted last wins.
    pub fn merged(&self) -> BTreeMap<String, TweakValue> {
        let mut merged = BTreeMap::new();
        for (site, default) in &self.sites {
            merged.insert(site.label.clone(), *default);
        }
        merged
    }

    fn notify(&mut self, event: BoardEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
