use heaptree::{config, HeapMode, HeapTree};

fn main() {
    run_main();
}

fn run_main() {
    use clap::{App, Arg};
    // 命令行解析
    let matches = App::new("heaptree")
        .about("Builds breadth-first heaps and prints their storage order")
        .arg(Arg::with_name("values").multiple(true))
        .arg(Arg::with_name("min").long("min").help("order the heap min-first"))
        .arg(Arg::with_name("trace").long("trace").help("print every placement on stderr"))
        .get_matches();

    if matches.is_present("trace") {
        config::set_trace(true);
    }

    let values = match matches.values_of("values") {
        Some(values) => values,
        None => {
            demo();
            return;
        }
    };

    let mut parsed = Vec::new();
    for v in values {
        match v.parse::<i64>() {
            Ok(n) => parsed.push(n),
            Err(err) => {
                eprintln!("invalid value {:?}: {}", v, err);
                std::process::exit(2);
            }
        }
    }

    let mode = if matches.is_present("min") {
        HeapMode::MinFirst
    } else {
        HeapMode::MaxFirst
    };
    let mut heap = HeapTree::with_mode(mode);
    heap.extend(parsed);
    println!("Size: {}", heap.size());
    print!("{}", heap);
}

/// 默认演示: 最小堆整数, 最大堆字符串
fn demo() {
    let mut heap = HeapTree::new();
    if let Err(err) = heap.set_mode(HeapMode::MinFirst) {
        eprintln!("{}", err);
    }

    heap.insert(4);
    for value in [12, 14, 5, 8, 15] {
        heap.insert(value);
        println!("{}", heap);
    }
    heap.insert(30);
    heap.insert(1);

    println!("Size: {}", heap.size());
    println!("{}", heap);

    let mut names = HeapTree::new();
    for name in ["Albert", "Jorge", "Carla", "Samu", "Marti"] {
        names.insert(name.to_string());
    }
    println!("{}", names);
}
