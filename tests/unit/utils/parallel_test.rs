use super::*;

#[test]
fn can_preserve_order_in_parallel_collect() {
    let source = (0..1024).collect::<Vec<_>>();

    let result = parallel_collect(&source, |&value| value * 2);

    assert_eq!(result, (0..1024).map(|value| value * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_operation_on_dedicated_thread_pool() {
    let thread_pool = ThreadPool::new(2);

    let result = thread_pool.execute(|| parallel_collect(&[1, 2, 3], |&value| value + 1));

    assert_eq!(result, vec![2, 3, 4]);
}

#[test]
fn can_reuse_shared_thread_pool() {
    let first = shared_thread_pool();
    let second = shared_thread_pool();

    assert!(Arc::ptr_eq(&first, &second));
}
