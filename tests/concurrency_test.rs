//! Distinct containers may be used from different threads at the same time.

use crossbeam_utils::thread;
use solo::Optional;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_auto_traits_follow_value_type() {
    assert_send_sync::<Optional<String>>();
    assert_send_sync::<Optional<Vec<u64>>>();
}

#[test]
fn test_distinct_containers_across_threads() {
    let mut containers: Vec<Optional<Vec<usize>>> = (0..8).map(|_| Optional::new()).collect();

    thread::scope(|s| {
        for (i, opt) in containers.iter_mut().enumerate() {
            s.spawn(move |_| {
                for round in 0..1_000 {
                    opt.emplace(vec![i; round % 7]);
                    if round % 3 == 0 {
                        opt.reset();
                    }
                }
                opt.emplace(vec![i]);
            });
        }
    })
    .unwrap();

    for (i, opt) in containers.iter().enumerate() {
        assert_eq!(opt.value(), Ok(&vec![i]));
    }
}

#[test]
fn test_shared_reads_across_threads() {
    let shared = Optional::some(String::from("shared"));

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|_| {
                assert_eq!(shared.value().map(String::len), Ok(6));
                assert_eq!(shared.value_or("x"), "shared");
            });
        }
    })
    .unwrap();
}

#[test]
fn test_move_between_threads() {
    let mut source = Optional::some(vec![1, 2, 3]);
    let moved = source.take();

    let sum = std::thread::spawn(move || moved.into_value().map(|v| v.iter().sum::<i32>()))
        .join()
        .unwrap();

    assert_eq!(sum, Ok(6));
    assert!(source.is_empty());
}
