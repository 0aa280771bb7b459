use anyhow::Result;
use log::{info, LevelFilter};

use stridemat::config::{DisplayConfig, Fill};
use stridemat::math::{Matrix, MutableMatrix, MutableVector};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("STRIDEMAT_LOG", "error,stridemat=debug"))
        .init();

    // every other element, then write through the view
    let v = MutableVector::new(5, |i| i as f64)?;
    let odd = v.view(1, 5, 2)?;
    info!("odd elements of {}: {}", v, odd);
    odd.set(0, 10.0)?;
    info!("after writing through the view: {}", v);

    // a reversed column block of a matrix
    let m = MutableMatrix::new(4, 4, |r, c| (4 * r + c) as f64)?;
    let block = m.view(0, 4, 2, 3, -1, -2)?;
    println!("block of\n{}\nis\n{}", m, block);

    block.fill(0.0)?;
    println!("after zeroing the block:\n{}", m);

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    println!("{}\ntimes\n{}\n=\n{}", a, b, a.times(&b)?);

    let noise = Matrix::from_fill(6, 6, Fill::Gaussian)?;
    let cfg = DisplayConfig::new(Some(3), Some(4), Some(4));
    println!("gaussian noise:\n{}", noise.render(&cfg)?);

    Ok(())
}
