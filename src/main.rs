use anyhow::Context;
use dsa::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut arr = DynamicArray::with_capacity(2);
    for value in [10, 20, 30] {
        arr.insert(value);
    }
    arr.remove_at(1)?;
    info!(elements = ?arr, capacity = arr.capacity(), "array");

    let mut list: LinkedList = (1..=5).collect();
    list.add_first(0);
    list.reverse();
    let second_last = list.get_kth_from_the_end(2)?;
    info!(elements = ?list, second_last, "linked list");

    let mut stack = Stack::with_capacity(3);
    for value in [1, 2, 3] {
        stack.push(value)?;
    }
    let top = stack.peek()?;
    info!(top, elements = ?stack.as_slice(), "stack");

    for tag in ["array", "stack"] {
        let mut queue = new_queue(tag, 3).with_context(|| format!("building {tag} queue"))?;
        for value in [1, 2, 3] {
            queue.enqueue(value)?;
        }

        let mut order = Vec::with_capacity(queue.len());
        while let Ok(value) = queue.dequeue() {
            order.push(value);
        }
        info!(kind = tag, ?order, "queue drained");
    }

    Ok(())
}
