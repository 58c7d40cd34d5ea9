use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "gate_sim", about = "Dense quantum gate simulator")]
pub struct Options {
    #[structopt(
        name = "oracle",
        short = "f",
        long = "oracle",
        default_value = "identity",
        possible_values = &["constant0", "constant1", "identity", "negation"],
        help = "the 1-bit boolean function to run through the Deutsch algorithm"
    )]
    pub oracle: String,

    #[structopt(
        name = "shots",
        short = "s",
        long = "shots",
        default_value = "0",
        help = "number of measurement shots to sample from the output distribution"
    )]
    pub shots: usize,
}
