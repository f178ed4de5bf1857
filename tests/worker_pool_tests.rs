use johnson_apsp::{Error, WorkerPool};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn test_tasks_return_values() {
    let pool = WorkerPool::new(4).unwrap();
    assert_eq!(pool.thread_count(), 4);

    let handles: Vec<_> = (0..100u64)
        .map(|i| pool.submit(move || i * i).unwrap())
        .collect();

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, (0..100u64).map(|i| i * i).collect::<Vec<_>>());
}

#[test]
fn test_default_size_uses_hardware_parallelism() {
    let pool = WorkerPool::new(0).unwrap();
    assert_eq!(pool.thread_count(), WorkerPool::optimal_thread_count());
    assert!(pool.thread_count() >= 1);
}

#[test]
fn test_single_worker_runs_fifo() {
    let pool = WorkerPool::new(1).unwrap();
    let order = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let order = Arc::clone(&order);
            pool.submit(move || order.lock().unwrap().push(i)).unwrap()
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*order.lock().unwrap(), (0..20).collect::<Vec<_>>());
}

#[test]
fn test_submit_after_shutdown_is_reported() {
    let pool = WorkerPool::new(2).unwrap();
    let handle = pool.submit(|| 1).unwrap();
    assert_eq!(handle.join().unwrap(), 1);

    pool.shutdown();
    assert!(pool.is_shutdown());
    assert!(matches!(pool.submit(|| 2), Err(Error::PoolShutdown)));

    // Shutting down twice is harmless
    pool.shutdown();
}

#[test]
fn test_queued_tasks_finish_before_shutdown_returns() {
    let pool = WorkerPool::new(2).unwrap();
    let done = Arc::new(AtomicUsize::new(0));

    for _ in 0..50 {
        let done = Arc::clone(&done);
        pool.submit(move || {
            done.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    }
    pool.shutdown();

    assert_eq!(done.load(Ordering::SeqCst), 50);
}

#[test]
fn test_panicking_task_is_reported_and_pool_survives() {
    let pool = WorkerPool::new(1).unwrap();

    let failing = pool.submit(|| -> u32 { panic!("boom") }).unwrap();
    match failing.join() {
        Err(Error::TaskFailed(msg)) => assert!(msg.contains("boom")),
        other => panic!("expected TaskFailed, got {:?}", other),
    }

    let ok = pool.submit(|| 7u32).unwrap();
    assert_eq!(ok.join().unwrap(), 7);
}
