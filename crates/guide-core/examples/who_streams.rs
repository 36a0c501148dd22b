use guide_core::{Movie, StreamingGuide, StreamingService};

fn main() -> guide_core::Result<()> {
    let mut alpha = StreamingService::new("AlphaFlix");
    alpha.add_movie(Movie::new("Dune", "Sci-Fi", "Denis Villeneuve", 2021)?);

    let mut beta = StreamingService::new("BetaStream");
    beta.add_movie(Movie::new("Dune", "Sci-Fi", "David Lynch", 1984)?);
    beta.add_movie(Movie::new("Arrival", "Sci-Fi", "Denis Villeneuve", 2016)?);

    let mut guide = StreamingGuide::new();
    guide.add_streaming_service(alpha);
    guide.add_streaming_service(beta);

    for title in ["Dune", "Arrival", "Inception"] {
        match guide.who_streams_this_movie(title) {
            Some(found) => println!("{}", found),
            None => println!("{} is not streaming anywhere", title),
        }
    }

    Ok(())
}
