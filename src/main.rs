use gate_sim::deutsch;
use gate_sim::options::Options;
use structopt::StructOpt;

fn main() {
    let options = Options::from_args();

    let f: fn(bool) -> bool = match options.oracle.as_str() {
        "constant0" => |_| false,
        "constant1" => |_| true,
        "identity" => |x| x,
        "negation" => |x| !x,
        other => panic!("Unknown oracle function: {other}"),
    };

    let result = match deutsch::run(f) {
        Ok(register) => register,
        Err(err) => {
            panic!("Failed to run Deutsch circuit: {err}");
        }
    };

    let num_qubits = result.num_qubits();
    println!("measurement probabilities ({}):", options.oracle);
    for (idx, p) in result.probabilities().into_iter().enumerate() {
        println!("p(|{:0width$b}>) = {:.8}", idx, p, width = num_qubits);
    }

    if options.shots > 0 {
        let mut rng = rand::thread_rng();
        let mut counts = vec![0usize; 1 << num_qubits];
        for _ in 0..options.shots {
            counts[result.sample(&mut rng)] += 1;
        }

        println!("sampled {} shots:", options.shots);
        for (idx, count) in counts.into_iter().enumerate() {
            println!("|{:0width$b}> {:>8}", idx, count, width = num_qubits);
        }
    }
}
