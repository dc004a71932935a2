//! Integration tests for the lock-guarded tree handle under
//! multi-threaded access.

use std::thread;

use mqtt_topic_tree::SharedTopicTree;

#[test]
fn concurrent_inserts_accumulate_refcounts() {
	let tree = SharedTopicTree::new();

	let handles: Vec<_> = (0 .. 8)
		.map(|_| {
			let tree = tree.clone();
			thread::spawn(move || {
				for i in 0 .. 100 {
					tree.insert(format!("devices/{}/status", i % 10)).unwrap();
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(tree.size(), 10);
	for i in 0 .. 10 {
		assert_eq!(tree.refcount(format!("devices/{i}/status")), 80);
	}
}

#[test]
fn balanced_insert_remove_leaves_empty_tree() {
	let tree = SharedTopicTree::new();

	let handles: Vec<_> = (0 .. 8)
		.map(|worker| {
			let tree = tree.clone();
			thread::spawn(move || {
				let topic = format!("workers/{worker}/events/#");
				for _ in 0 .. 200 {
					tree.insert(topic.as_str()).unwrap();
					tree.remove(topic.as_str());
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert!(tree.is_empty());
	assert_eq!(tree.size(), 0);
	assert!(tree.dump().is_empty());
}

#[test]
fn readers_observe_consistent_snapshots() {
	let tree = SharedTopicTree::new();
	// The anchor pattern stays put while writers churn their own branches.
	tree.insert("telemetry/#").unwrap();

	let writers: Vec<_> = (0 .. 4)
		.map(|worker| {
			let tree = tree.clone();
			thread::spawn(move || {
				let topic = format!("telemetry/{worker}/cpu");
				for _ in 0 .. 500 {
					tree.insert(topic.as_str()).unwrap();
					tree.remove(topic.as_str());
				}
			})
		})
		.collect();

	let readers: Vec<_> = (0 .. 4)
		.map(|worker| {
			let tree = tree.clone();
			thread::spawn(move || {
				for _ in 0 .. 500 {
					let matched =
						tree.matches(format!("telemetry/{worker}/cpu"));
					// telemetry/# always matches; the exact pattern may or
					// may not be present depending on writer timing.
					assert!(!matched.is_empty());
					assert!(matched.len() <= 2);
					assert!(
						matched.iter().any(|value| value == "telemetry/#")
					);
				}
			})
		})
		.collect();

	for handle in writers.into_iter().chain(readers) {
		handle.join().unwrap();
	}

	assert_eq!(tree.size(), 1);
	assert_eq!(tree.refcount("telemetry/#"), 1);
}

#[test]
fn results_are_owned_copies() {
	let tree = SharedTopicTree::new();
	tree.insert("a/b").unwrap();

	let matched = tree.matches("a/b");
	let listed = tree.to_list();

	// Mutating after the read must not invalidate earlier results.
	tree.clear();
	assert_eq!(matched[0], "a/b");
	assert_eq!(listed, [("a/b".into(), 1)]);
}

#[test]
fn insert_checked_rejects_oversize_topics() {
	let tree = SharedTopicTree::new();

	let too_deep = vec!["a"; 64].join("/");
	assert!(tree.insert_checked(too_deep).is_err());
	assert!(tree.is_empty());

	assert!(tree.insert_checked("rooms/+/door").is_ok());
	assert_eq!(tree.size(), 1);
}
