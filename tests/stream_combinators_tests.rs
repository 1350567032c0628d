use std::cell::Cell;
use std::rc::Rc;

use lazy_stream::{
    from_items, range, range_from, stream, Stream, StreamExt, UtilityStreamExt,
};

/// Infinite stream `start, start + 1, ...` that counts how many tails were forced
fn counted_from(start: i64, forced: Rc<Cell<usize>>) -> Stream<i64> {
    Stream::cons(start, move || {
        forced.set(forced.get() + 1);
        counted_from(start + 1, Rc::clone(&forced))
    })
}

#[test]
fn test_map() {
    let stream = stream![1, 2, 3, 4, 5];
    assert_eq!(stream.map(|x| x * 2), stream![2, 4, 6, 8, 10]);
}

#[test]
fn test_map_changes_type() {
    let stream = stream![1, 2, 3];
    let labels = stream.map(|x| format!("#{}", x));
    assert_eq!(labels.materialize(3), vec!["#1", "#2", "#3"]);
}

#[test]
fn test_map_empty() {
    assert!(Stream::<i32>::empty().map(|x| x + 1).is_empty());
}

#[test]
fn test_map_leaves_source_untouched() {
    let nats = range_from(1);
    let evens = nats.map(|x| x * 2);
    assert_eq!(evens.materialize(3), vec![2, 4, 6]);
    assert_eq!(nats.materialize(3), vec![1, 2, 3]);
}

#[test]
fn test_filter() {
    let stream = stream![1, 2, 3, 4, 5, 6];
    assert_eq!(stream.filter(|x| x % 2 == 0), stream![2, 4, 6]);
}

#[test]
fn test_filter_infinite() {
    let odds = range_from(1).filter(|x| x % 2 != 0);
    assert_eq!(odds.materialize(3), vec![1, 3, 5]);
}

#[test]
fn test_filter_skips_long_runs() {
    let stream = range(1, Some(200_000)).filter(|x| *x == 200_000);
    assert_eq!(stream.materialize(2), vec![200_000]);
}

#[test]
fn test_take() {
    let stream = stream![1, 2, 3, 4, 5];
    assert_eq!(stream.take(3), stream![1, 2, 3]);
    assert_eq!(stream.take(10).length(), 5);
    assert!(stream.take(0).is_empty());
    assert!(Stream::<i32>::empty().take(3).is_empty());
}

#[test]
fn test_take_does_not_force_past_its_end() {
    let forced = Rc::new(Cell::new(0));
    let stream = counted_from(1, Rc::clone(&forced));

    let first_three = stream.take(3);
    assert_eq!(forced.get(), 0);

    assert_eq!(first_three.length(), 3);
    assert_eq!(forced.get(), 2);
}

#[test]
fn test_drop() {
    let stream = stream![10, 20, 30];
    assert_eq!(stream.drop(2), Stream::single(30));
    assert_eq!(stream.drop(0), stream);
    assert!(stream.drop(3).is_empty());
    assert!(stream.drop(10).is_empty());
    assert!(Stream::<i32>::empty().drop(2).is_empty());
}

#[test]
fn test_drop_infinite() {
    assert_eq!(range_from(1).drop(10).head(), Ok(11));
}

#[test]
fn test_take_while() {
    let stream = stream![1, 2, 3, 10, 1];
    assert_eq!(stream.take_while(|x| *x < 5), stream![1, 2, 3]);
    assert!(stream.take_while(|x| *x > 5).is_empty());
    assert_eq!(range_from(1).take_while(|x| *x <= 4).length(), 4);
}

#[test]
fn test_drop_while() {
    let stream = stream![-5, -8, -2, 34, 10, -2];
    let remaining = stream.drop_while(|x| *x < 0);
    assert_eq!(remaining, stream![34, 10, -2]);
}

#[test]
fn test_drop_while_everything_matches() {
    let stream = stream![-1, -2];
    assert!(stream.drop_while(|x| *x < 0).is_empty());
    assert!(Stream::<i32>::empty().drop_while(|x| *x < 0).is_empty());
}

#[test]
fn test_append() {
    let stream1 = stream![1];
    let stream2 = stream![2, 3];
    let appended = stream1.append(&stream2);
    assert_eq!(appended.length(), 3);
    assert_eq!(appended.at(1), Ok(2));
    assert_eq!(appended.at(2), Ok(3));
}

#[test]
fn test_append_identity() {
    let stream = stream![2, 3];
    assert_eq!(Stream::empty().append(&stream), stream);
    assert_eq!(stream.append(&Stream::empty()), stream);
}

#[test]
fn test_append_is_lazy_in_second_stream() {
    let forced = Rc::new(Cell::new(0));
    let second = counted_from(100, Rc::clone(&forced));
    let appended = stream![1, 2].append(&second);

    assert_eq!(appended.materialize(3), vec![1, 2, 100]);
    assert_eq!(forced.get(), 0);

    assert_eq!(appended.at(4), Ok(102));
    assert_eq!(forced.get(), 2);
}

#[test]
fn test_append_to_infinite() {
    let stream = range_from(1).append(&stream![0]);
    assert_eq!(stream.at(100), Ok(101));
}

#[test]
fn test_prepend() {
    let stream = stream![2, 3];
    assert_eq!(stream.prepend(1), stream![1, 2, 3]);
    assert_eq!(Stream::empty().prepend(1), Stream::single(1));
}

#[test]
fn test_zip_keeps_longer_remainder() {
    let left = from_items(vec![4, 8, 12, 16]);
    let right = from_items(vec![1, 12, 42]);
    let zipped = left.zip(&right, std::cmp::max);
    assert_eq!(zipped.length(), 4);
    assert_eq!(zipped.materialize(10), vec![4, 12, 42, 16]);
}

#[test]
fn test_zip_right_longer() {
    let zipped = stream![1, 2].zip(&stream![10, 20, 30, 40], |x, y| x + y);
    assert_eq!(zipped, stream![11, 22, 30, 40]);
}

#[test]
fn test_zip_with_empty() {
    let stream = stream![1, 2, 3];
    assert_eq!(stream.zip(&Stream::empty(), |x, y| x * y), stream);
    assert_eq!(Stream::empty().zip(&stream, |x, y| x * y), stream);
}

#[test]
fn test_zip_infinite() {
    let products = range_from(1).zip(&range_from(1), |x, y| x * y);
    assert_eq!(products.materialize(4), vec![1, 4, 9, 16]);
}

#[test]
fn test_inspect_runs_as_nodes_are_produced() {
    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    let stream = range_from(1).inspect(move |_| counter.set(counter.get() + 1));
    assert_eq!(seen.get(), 1);

    assert_eq!(stream.materialize(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(seen.get(), 5);
}

#[test]
fn test_unmemoized_tail_forces_again() {
    let forced = Rc::new(Cell::new(0));
    let stream = counted_from(1, Rc::clone(&forced));
    stream.tail().unwrap();
    stream.tail().unwrap();
    assert_eq!(forced.get(), 2);
}

#[test]
fn test_memoize_forces_each_tail_once() {
    let forced = Rc::new(Cell::new(0));
    let stream = counted_from(1, Rc::clone(&forced)).memoize();

    assert_eq!(stream.materialize(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(forced.get(), 4);

    assert_eq!(stream.materialize(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(stream.clone().at(4), Ok(5));
    assert_eq!(forced.get(), 4);

    assert_eq!(stream.at(5), Ok(6));
    assert_eq!(forced.get(), 5);
}

#[test]
fn test_memoize_finite() {
    let stream = stream![1, 2, 3].memoize();
    assert_eq!(stream, stream![1, 2, 3]);
    assert!(Stream::<i32>::empty().memoize().is_empty());
}
