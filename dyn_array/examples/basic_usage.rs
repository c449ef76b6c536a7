use dyn_array::{ArrayError, DynamicArray, FnOps, NaturalOps};

#[derive(Debug)]
struct Task {
    priority: u8,
    name: String,
}

fn main() -> Result<(), ArrayError> {
    // Plain values use their own Display / Ord
    let mut letters = DynamicArray::with_capacity(2, NaturalOps)?;
    for letter in ["x", "y", "z"] {
        letters.push(letter)?;
    }
    letters.print();
    println!("length {} capacity {}", letters.len(), letters.capacity());

    // Behavior supplied as closures
    let ops = FnOps::builder()
        .destroy(|task: Task| println!("releasing {}", task.name))
        .stringify(|task: &Task| format!("{}:{}", task.priority, task.name))
        .compare(|a: &Task, b: &Task| a.priority.cmp(&b.priority))
        .build()?;

    let mut queue = DynamicArray::new(ops)?;
    for (priority, name) in [(3, "deploy"), (1, "lint"), (2, "test"), (1, "fmt")] {
        queue.insert_sorted(Task {
            priority,
            name: name.to_string(),
        })?;
    }
    queue.print();

    if let Some(task) = queue.find_and_remove(|task: &Task, name: &str| task.name == name, "test") {
        println!("took {:?}", task);
    }

    // Shrinking releases the tail through the destroy closure
    queue.resize(2)?;
    queue.print();

    Ok(())
}
