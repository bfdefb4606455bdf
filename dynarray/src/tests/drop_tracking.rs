use super::Tracked;
use crate::DynamicArray;
use alloc::rc::Rc;
use core::cell::Cell;

fn tracked_array(drops: &Rc<Cell<usize>>, len: usize) -> DynamicArray<Tracked> {
  (0..len).map(|id| Tracked::new(drops, id)).collect()
}

#[test]
fn clear_and_truncate_drop_the_tail() {
  let drops = Rc::new(Cell::new(0));
  let mut array = tracked_array(&drops, 6);
  array.truncate(10);
  assert_eq!(drops.get(), 0);
  array.truncate(4);
  assert_eq!(drops.get(), 2);
  assert_eq!(array.iter().map(|elem| elem.id).collect::<alloc::vec::Vec<_>>(), [0, 1, 2, 3]);
  array.clear();
  assert_eq!(drops.get(), 6);
  drop(array);
  assert_eq!(drops.get(), 6);
}

#[test]
fn erase_drops_only_the_erased_element() {
  let drops = Rc::new(Cell::new(0));
  let mut array = tracked_array(&drops, 3);
  let _ = array.erase(1);
  assert_eq!(drops.get(), 1);
  assert_eq!((array[0].id, array[1].id), (0, 2));
  let removed = array.remove(0);
  assert_eq!(drops.get(), 1);
  drop(removed);
  assert_eq!(drops.get(), 2);
  drop(array);
  assert_eq!(drops.get(), 3);
}

#[test]
fn every_element_is_dropped_once() {
  let drops = Rc::new(Cell::new(0));
  let array = tracked_array(&drops, 5);
  drop(array);
  assert_eq!(drops.get(), 5);
}

#[test]
fn growth_does_not_drop_relocated_elements() {
  let drops = Rc::new(Cell::new(0));
  let mut array = DynamicArray::new();
  for id in 0..9 {
    array.push_back(Tracked::new(&drops, id));
  }
  let _ = array.insert(0, Tracked::new(&drops, 9));
  array.reserve(100);
  array.shrink_to_fit();
  assert_eq!(drops.get(), 0);
  drop(array);
  assert_eq!(drops.get(), 10);
}

#[test]
fn partially_consumed_iterator_drops_the_rest() {
  let drops = Rc::new(Cell::new(0));
  let mut iter = tracked_array(&drops, 5).into_iter();
  let first = iter.next();
  let last = iter.next_back();
  assert_eq!(drops.get(), 0);
  drop(iter);
  assert_eq!(drops.get(), 3);
  drop((first, last));
  assert_eq!(drops.get(), 5);
}

#[test]
fn pop_back_hands_over_ownership() {
  let drops = Rc::new(Cell::new(0));
  let mut array = tracked_array(&drops, 2);
  let popped = array.pop_back();
  assert_eq!(drops.get(), 0);
  assert_eq!(popped.as_ref().map(|elem| elem.id), Some(1));
  drop(popped);
  assert_eq!(drops.get(), 1);
  drop(array);
  assert_eq!(drops.get(), 2);
}

#[test]
fn replaced_destination_drops_its_old_elements() {
  let drops = Rc::new(Cell::new(0));
  let mut source = tracked_array(&drops, 2);
  let mut destination = tracked_array(&drops, 3);
  assert_eq!(destination.len(), 3);
  destination = source.take();
  assert_eq!(drops.get(), 3);
  drop(source);
  assert_eq!(drops.get(), 3);
  drop(destination);
  assert_eq!(drops.get(), 5);
}

#[test]
fn resize_drops_surplus_and_clones_are_independent() {
  let drops = Rc::new(Cell::new(0));
  let mut array = tracked_array(&drops, 4);
  let copy = array.clone();
  array.resize_with(1, || Tracked::new(&drops, 100));
  assert_eq!(drops.get(), 3);
  assert_eq!(copy.len(), 4);
  drop(copy);
  assert_eq!(drops.get(), 7);
  drop(array);
  assert_eq!(drops.get(), 8);
}

#[test]
fn swap_moves_no_element() {
  let drops = Rc::new(Cell::new(0));
  let mut a = tracked_array(&drops, 2);
  let mut b = tracked_array(&drops, 1);
  a.swap(&mut b);
  assert_eq!(drops.get(), 0);
  assert_eq!((a.len(), b.len()), (1, 2));
  drop((a, b));
  assert_eq!(drops.get(), 3);
}
