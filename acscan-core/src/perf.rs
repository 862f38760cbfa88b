// Quick release mode throughput check
//
// Run with: cargo test --release -p acscan-core matcher_perf -- --ignored

#[cfg(test)]
mod perf_tests {
    use crate::Automaton;
    use std::time::Instant;

    #[test]
    #[ignore] // Run with: cargo test --release matcher_perf -- --ignored
    fn matcher_perf() {
        let patterns: Vec<_> = (0..1000).map(|i| format!("pattern_{}", i)).collect();
        let automaton = Automaton::build(&patterns).unwrap();

        let text = "fooasldkjflaksjpattern_42sdfasdfpattern_999asdfdf".repeat(20);

        // Warmup
        for _ in 0..1000 {
            let _ = automaton.matches(&text);
        }

        // Benchmark
        let iterations = 100_000;
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = automaton.match_count(&text);
        }
        let duration = start.elapsed();
        let bytes = (text.len() * iterations as usize) as f64;
        let ns_per_op = duration.as_nanos() / iterations;

        println!("\n=== Release Mode Matcher Performance ===");
        println!("Iterations: {}", iterations);
        println!("Text length: {} bytes", text.len());
        println!("Total time: {:?}", duration);
        println!("Per operation: {} ns", ns_per_op);
        println!(
            "Throughput: {:.2} MB/sec",
            bytes / duration.as_secs_f64() / 1_000_000.0
        );

        // Assertion for minimum performance: at least 50 MB/s
        let ns_per_byte = ns_per_op as f64 / text.len() as f64;
        assert!(
            ns_per_byte < 20.0,
            "Matcher should be fast in release mode, got {:.2} ns/byte",
            ns_per_byte
        );
    }
}
