use thiserror::Error;


/// An error that occurs when a slot cannot be obtained for a new element.<br/>
/// 新しい要素のためのスロットを確保できなかった場合に発生するエラー。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedListError {
  #[error("Failed to push an element: limit of {0} elements reached")]
  CapacityExceeded(usize),
  #[error("Failed to push an element: storage could not be allocated")]
  AllocationFailed,
}

static_assertions::assert_impl_all!(IndexedListError: Send, Sync);

/// A stable key of an element stored in an [`IndexedList`].<br/>
/// [`IndexedList`] に格納された要素を指す安定したキー。
///
/// A key stays valid until its element is removed. Slots are reused, but every insertion gets a new
/// serial, so a key of a removed element never resolves to a later element.<br/>
/// キーは要素が削除されるまで有効。スロットは再利用されるが、挿入ごとに新しいシリアルが割り当てられるため、
/// 削除済み要素のキーが後から挿入された要素を指すことはない。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct IndexedListKey {
  slot: usize,
  serial: u64,
}

impl IndexedListKey {
  #[inline]
  pub const fn slot(self) -> usize {
    self.slot
  }

  #[inline]
  pub const fn serial(self) -> u64 {
    self.serial
  }
}

#[derive(Debug)]
struct Node<T> {
  serial: u64,
  value: T,
  prev: Option<usize>,
  next: Option<usize>,
}

/// A doubly linked list whose nodes live in a slot arena.<br/>
/// ノードをスロットアリーナに保持する双方向連結リスト。
///
/// Appending at the tail and removing by key are both O(1). The head and tail are tracked by the list
/// itself, never by the nodes.<br/>
/// 末尾への追加とキーによる削除はどちらも O(1)。先頭と末尾はノードではなくリスト自身が管理する。
#[derive(Debug)]
pub struct IndexedList<T> {
  slots: Vec<Option<Node<T>>>,
  vacant: Vec<usize>,
  head: Option<usize>,
  tail: Option<usize>,
  len: usize,
  next_serial: u64,
  limit: Option<usize>,
}

impl<T> IndexedList<T> {
  pub fn new() -> Self {
    Self {
      slots: Vec::new(),
      vacant: Vec::new(),
      head: None,
      tail: None,
      len: 0,
      next_serial: 1,
      limit: None,
    }
  }

  /// Creates a list that holds at most `limit` elements.<br/>
  /// 最大 `limit` 個の要素を保持するリストを生成します。
  pub fn with_limit(limit: usize) -> Self {
    Self {
      limit: Some(limit),
      ..Self::new()
    }
  }

  pub fn limit(&self) -> Option<usize> {
    self.limit
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn contains(&self, key: IndexedListKey) -> bool {
    self.node(key).is_some()
  }

  pub fn get(&self, key: IndexedListKey) -> Option<&T> {
    self.node(key).map(|node| &node.value)
  }

  pub fn get_mut(&mut self, key: IndexedListKey) -> Option<&mut T> {
    self.node_mut(key).map(|node| &mut node.value)
  }

  /// Appends an element at the tail.<br/>
  /// 要素を末尾に追加します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(key)` - The key of the new element. / 追加した要素のキー。
  /// - `Err(IndexedListError::CapacityExceeded)` - The limit is reached. / 上限に達している場合。
  /// - `Err(IndexedListError::AllocationFailed)` - Storage could not be grown. / 領域を拡張できなかった場合。
  pub fn push_back(&mut self, value: T) -> Result<IndexedListKey, IndexedListError> {
    if let Some(limit) = self.limit {
      if self.len >= limit {
        return Err(IndexedListError::CapacityExceeded(limit));
      }
    }

    let slot = match self.vacant.pop() {
      Some(slot) => slot,
      None => {
        self
          .slots
          .try_reserve(1)
          .map_err(|_| IndexedListError::AllocationFailed)?;
        self.slots.push(None);
        self.slots.len() - 1
      }
    };

    let serial = self.next_serial;
    self.next_serial = self.next_serial.wrapping_add(1).max(1);

    let prev = self.tail;
    match prev {
      Some(prev) => {
        if let Some(prev_node) = self.slot_mut(prev) {
          prev_node.next = Some(slot);
        }
      }
      None => self.head = Some(slot),
    }
    self.tail = Some(slot);

    self.slots[slot] = Some(Node {
      serial,
      value,
      prev,
      next: None,
    });
    self.len += 1;

    Ok(IndexedListKey { slot, serial })
  }

  /// Removes the element identified by `key` and returns it.<br/>
  /// `key` が指す要素を削除して返します。
  ///
  /// Returns `None` when the key was already removed.<br/>
  /// キーが既に削除済みの場合は `None` を返します。
  pub fn remove(&mut self, key: IndexedListKey) -> Option<T> {
    self.node(key)?;
    let node = self.slots[key.slot].take()?;

    match (node.prev, node.next) {
      (Some(prev), Some(next)) => {
        if let Some(prev_node) = self.slot_mut(prev) {
          prev_node.next = Some(next);
        }
        if let Some(next_node) = self.slot_mut(next) {
          next_node.prev = Some(prev);
        }
      }
      (Some(prev), None) => {
        if let Some(prev_node) = self.slot_mut(prev) {
          prev_node.next = None;
        }
        self.tail = Some(prev);
      }
      (None, None) => {
        self.head = None;
        self.tail = None;
      }
      (None, Some(next)) => {
        if let Some(next_node) = self.slot_mut(next) {
          next_node.prev = None;
        }
        self.head = Some(next);
      }
    }

    self.vacant.push(key.slot);
    self.len -= 1;
    Some(node.value)
  }

  pub fn head(&self) -> Option<IndexedListKey> {
    self.head.and_then(|slot| self.key_of(slot))
  }

  pub fn tail(&self) -> Option<IndexedListKey> {
    self.tail.and_then(|slot| self.key_of(slot))
  }

  pub fn prev_of(&self, key: IndexedListKey) -> Option<IndexedListKey> {
    self.node(key)?.prev.and_then(|slot| self.key_of(slot))
  }

  pub fn next_of(&self, key: IndexedListKey) -> Option<IndexedListKey> {
    self.node(key)?.next.and_then(|slot| self.key_of(slot))
  }

  /// Iterates from head to tail.<br/>
  /// 先頭から末尾へ走査します。
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      list: self,
      cursor: self.head,
      forward: true,
    }
  }

  /// Iterates from tail to head.<br/>
  /// 末尾から先頭へ走査します。
  pub fn iter_rev(&self) -> Iter<'_, T> {
    Iter {
      list: self,
      cursor: self.tail,
      forward: false,
    }
  }

  /// Visits every element from head to tail with mutable access.<br/>
  /// 先頭から末尾まで、可変参照で全要素を訪問します。
  pub fn for_each_mut<F>(&mut self, mut f: F)
  where
    F: FnMut(IndexedListKey, &mut T), {
    let mut cursor = self.head;
    while let Some(slot) = cursor {
      let Some(node) = self.slot_mut(slot) else {
        break;
      };
      cursor = node.next;
      f(
        IndexedListKey {
          slot,
          serial: node.serial,
        },
        &mut node.value,
      );
    }
  }

  fn key_of(&self, slot: usize) -> Option<IndexedListKey> {
    self.slots.get(slot)?.as_ref().map(|node| IndexedListKey {
      slot,
      serial: node.serial,
    })
  }

  fn slot_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
    self.slots.get_mut(slot)?.as_mut()
  }

  fn node(&self, key: IndexedListKey) -> Option<&Node<T>> {
    self
      .slots
      .get(key.slot)?
      .as_ref()
      .filter(|node| node.serial == key.serial)
  }

  fn node_mut(&mut self, key: IndexedListKey) -> Option<&mut Node<T>> {
    self
      .slots
      .get_mut(key.slot)?
      .as_mut()
      .filter(|node| node.serial == key.serial)
  }
}

impl<T> Default for IndexedList<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// An iterator over the elements of an [`IndexedList`] in link order.<br/>
/// [`IndexedList`] の要素をリンク順に走査するイテレータ。
#[derive(Debug)]
pub struct Iter<'a, T> {
  list: &'a IndexedList<T>,
  cursor: Option<usize>,
  forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = (IndexedListKey, &'a T);

  fn next(&mut self) -> Option<Self::Item> {
    let slot = self.cursor?;
    let node = self.list.slots.get(slot)?.as_ref()?;
    self.cursor = if self.forward { node.next } else { node.prev };
    Some((
      IndexedListKey {
        slot,
        serial: node.serial,
      },
      &node.value,
    ))
  }
}
