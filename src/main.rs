use matrix_buffer::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    value_semantics()?;
    owned_handles();
    dispatch()?;
    rendering();
    Ok(())
}

fn value_semantics() -> Result<(), String> {
    let mut img = Matrix::<u8>::new(10, 20);
    println!("{}", img.allocation_report());
    img[(5, 6)] = 100;

    let img2 = img.clone();
    let img3 = img.clone();
    let mut img4 = Matrix::default();
    img4.clone_from(&img2);

    let img5 = img.take();
    let mut img6 = Matrix::default();
    img6.move_from(&mut img4);

    println!("img5(5, 6) = {}", img5[(5, 6)]);
    println!("img2(5, 6) = {}", img2[(5, 6)]);
    println!("img3(5, 6) = {}", img3.get(5, 6));
    println!("img6(5, 6) = {}", img6.get(5, 6));
    println!("moved-from img: {:?}, moved-from img4: {:?}", img.dims(), img4.dims());

    match img.element_at(5, 6) {
        Ok(_) => return Err("moved-from buffer still exposes storage".to_string()),
        Err(err) => println!("img(5, 6) after move: {err}"),
    }

    img.init(30, 10);
    println!("re-initialized img: {:?}", img.dims());
    Ok(())
}

fn owned_handles() {
    let mut unique = Box::new(Matrix::<u8>::new(10, 20));
    unique[(5, 6)] = 100;

    let shared = Rc::new(RefCell::new(Matrix::<u8>::new(100, 200)));
    let shared2 = Rc::clone(&shared);
    let shared3 = Rc::clone(&shared);
    shared.borrow_mut()[(5, 6)] = 100;
    for (name, handle) in [("shared", &shared), ("shared2", &shared2), ("shared3", &shared3)] {
        println!("{name}(5, 6) = {}", handle.borrow()[(5, 6)]);
    }
    println!("shared handles: {}", Rc::strong_count(&shared));
}

fn dispatch() -> Result<(), String> {
    let mut mat = Matrix::<u16>::new(10, 10);
    let mut img1 = Image::default();
    let mut img2 = Image::default();

    if let Err(err) = img1.element_at(5, 6) {
        println!("img1 before init: {err}");
    }
    img1.init(10, 10);
    *img1.element_at(5, 6).map_err(|e| e.to_string())? = Color::new(10, 20, 255);
    img1[(5, 6)] = 100u8.into();

    let objects: Vec<&mut dyn MatrixCore> = vec![&mut img1, &mut mat, &mut img2];
    for obj in objects {
        if as_image(obj).is_some() {
            let outcome = obj.load();
            println!("{outcome:?}");
        } else {
            println!("skipping {}", obj.element_type());
        }
    }
    Ok(())
}

fn rendering() {
    let mut mat = Matrix::<i32>::new(4, 3);
    mat[(2, 1)] = 2;
    print!("{}", mat.render_with(|v| format!("[{v}]")));

    let mut img = Image::new(2, 2);
    img[(1, 1)] = Color::new(10, 20, 30);
    print!(
        "{}",
        img.render_with(|c| format!("{}/{}/{}", c.r, c.g, c.b))
    );
}
