use lazy_stream::{
    accumulate, cycle, describe, fibonacci, fix, from_items, iterate, naturals, ones, primes,
    range, range_from, repeat, stream, successors, NumericStreamExt, Stream, StreamConfig,
    StreamExt, StreamResult, UtilityStreamExt,
};

fn double_num(x: i64) -> i64 {
    x * 2
}

fn main() -> StreamResult<()> {
    let config = StreamConfig::from_env();

    // Getting started: a finite stream of 10, 20, 30
    let finite = stream![10, 20, 30];
    println!("{}", describe("Stream length", finite.length())); // 3
    println!("{}", describe("Head", finite.head()?)); // 10
    println!("{}", describe("Item 2", finite.at(1)?)); // 20
    let rest = finite.tail()?;
    println!("{}", describe("Next item", rest.head()?)); // 20
    let last = rest.tail()?.tail()?;
    println!("{}", describe("Is stream empty", last.is_empty())); // true
    println!("{}", finite); // Head: 10 Next Head: 20 Next Head: 30 Next - End of Stream -

    // Walking a stream by hand
    let mut s = from_items(vec![10, 20, 30]);
    while let Stream::Cons(head, thunk) = s {
        println!("{}", head);
        s = thunk();
    }

    // Finite transformations
    let ten_to_fifteen = range(10, Some(15));
    print!("{}", ten_to_fifteen.map(double_num).preview(Some("10 - 15 doubled"), &config));
    print!("{}", ten_to_fifteen.filter(|x| x % 2 != 0).preview(Some("Odd numbers"), &config));
    range(10, Some(12)).walk(|n| println!("The element is: {}", n));

    let hundred = range(10, Some(100));
    let multiples_of_ten = hundred.scale(10);
    print!("{}", multiples_of_ten.preview(Some("Multiples of ten"), &config));
    print!("{}", hundred.add(&multiples_of_ten).preview(None, &config));

    let text = stream!["I'm", "a", "little", "teapot"];
    print!("{}", text.preview(None, &config));

    // Infinite streams
    let nats = range_from(1);
    print!("{}", nats.map(|x| x * 2).take(3).preview(Some("Evens"), &config));
    print!("{}", nats.filter(|x| x % 2 != 0).take(3).preview(Some("Odds"), &config));
    println!("{}", nats.render_with(&config));

    // Manual construction
    let chained = Stream::cons(10, || Stream::cons(20, || Stream::single(30)));
    print!("{}", chained.preview(Some("Chained stream"), &config));

    // Self-reference through deferred binding
    let my_ones = fix(|me| Stream::cons(1, move || me.force()));
    let my_nats = fix(move |me| {
        let my_ones = my_ones.clone();
        Stream::cons(1, move || me.force().add(&my_ones))
    });
    print!("{}", my_nats.take(5).preview(Some("Natural numbers by self-reference"), &config));
    print!("{}", ones().preview(Some("Built-in ones"), &config));
    print!("{}", naturals().preview(Some("Built-in naturals"), &config));

    print!("{}", repeat("hi").preview(None, &config));
    print!("{}", cycle(vec![1, 2, 3])?.preview(None, &config));
    print!("{}", iterate(0, |x| x + 2).preview(Some("Evens from iterate"), &config));
    print!("{}", successors(1, |x| x + 2).preview(Some("Odds from successors"), &config));
    print!("{}", accumulate(2, 2, |x, y| x * y).take(10).preview(Some("Powers of two"), &config));

    // Streams at work
    print!("{}", primes().take(10).preview(Some("First 10 primes"), &config));
    print!("{}", fibonacci().preview(Some("First 20 Fibonacci"), &config));

    Ok(())
}
