use std::collections::BTreeSet;

/// The cross-page selection set: ids of every record the user has checked,
/// on any page, since the session began.
///
/// Membership is independent of which page is currently displayed. Paging
/// away from a checked record and back again must show it checked, so the
/// set only ever changes through `reconcile` against the visible page or
/// by being replaced with a fresh empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
  ids: BTreeSet<u64>,
}

impl Selection {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fold the visible page's checkbox state back into the set.
  ///
  /// Visible ids that are checked join the set, visible ids that are not
  /// leave it. Ids from other pages are never touched; that rule is what
  /// lets a selection survive paging away and back. Pure: the receiver is
  /// left as-is and an updated set is returned.
  pub fn reconcile(&self, visible: &[u64], checked: &[u64]) -> Self {
    let checked: BTreeSet<u64> = checked.iter().copied().collect();

    let mut next = self.ids.clone();
    for id in visible {
      if checked.contains(id) {
        next.insert(*id);
      } else {
        next.remove(id);
      }
    }

    Self { ids: next }
  }

  /// Project the set down to the members visible on the current page, in
  /// page order. Everything else renders unchecked, even though the set may
  /// hold ids from other pages.
  pub fn visible_subset(&self, visible: &[u64]) -> Vec<u64> {
    visible.iter().copied().filter(|id| self.ids.contains(id)).collect()
  }

  pub fn contains(&self, id: u64) -> bool {
    self.ids.contains(&id)
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  /// All selected ids in ascending order.
  pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
    self.ids.iter().copied()
  }
}
